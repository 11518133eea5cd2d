//! Profile module - the output record and its assembly.

mod assembler;
mod payload;
mod record;

pub use assembler::{round_to, ProfileAssembler, PLACEHOLDER_NARRATIVE};
pub use payload::{QualitativePayload, MAX_LIST_ITEMS};
pub use record::{
    BehavioralProfile, ProfileMetadata, QualitativeProfile, QuantitativeMetrics, Recommendations,
};
