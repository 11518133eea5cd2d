//! Behavioral Risk - investment-psychology profiling from plain text
//!
//! This crate turns a corpus of personal writing (notes, transcripts) into a
//! behavioral risk profile: keyword rates per category, sentiment, a bounded
//! risk-tolerance score and a five-level label, optionally merged with a
//! qualitative narrative produced by a text-generation service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
