//! Filesystem adapters for the corpus and the profile artifact.

mod fs_corpus_source;
mod fs_profile_store;

pub use fs_corpus_source::FsCorpusSource;
pub use fs_profile_store::FsProfileStore;
