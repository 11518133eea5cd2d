//! Analysis module - the quantitative pipeline.
//!
//! [`QuantitativeAnalyzer`] chains tokenization, sentence estimation,
//! keyword matching, rate normalization, sentiment and risk scoring. All of
//! it is pure and deterministic for a given [`AnalysisConfig`].

mod analyzer;
mod config;

pub use analyzer::{QuantitativeAnalysis, QuantitativeAnalyzer};
pub use config::AnalysisConfig;
