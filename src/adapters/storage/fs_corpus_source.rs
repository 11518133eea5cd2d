//! Filesystem corpus source: every `*.txt` file in one directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

use crate::ports::{Corpus, CorpusSource, StorageError};

/// Reads `*.txt` files (non-recursive), sorted by file name, joined with `\n`.
///
/// Unreadable files are logged and skipped. A missing directory yields an
/// empty corpus so the analysis reports "no data" rather than an I/O error.
pub struct FsCorpusSource {
    input_dir: PathBuf,
}

impl FsCorpusSource {
    pub fn new(input_dir: impl AsRef<Path>) -> Self {
        Self {
            input_dir: input_dir.as_ref().to_path_buf(),
        }
    }

    /// Sorted `*.txt` file paths in the input directory.
    async fn text_files(&self) -> Result<Vec<PathBuf>, StorageError> {
        let mut entries = match fs::read_dir(&self.input_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(dir = %self.input_dir.display(), "Input directory does not exist");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::from_io(&e, &self.input_dir)),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::from_io(&e, &self.input_dir))?
        {
            let path = entry.path();
            let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
            if is_file && path.extension().map_or(false, |ext| ext == "txt") {
                files.push(path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

#[async_trait]
impl CorpusSource for FsCorpusSource {
    async fn load(&self) -> Result<Corpus, StorageError> {
        let files = self.text_files().await?;

        let mut texts = Vec::with_capacity(files.len());
        let mut source_files = Vec::with_capacity(files.len());
        for path in files {
            match fs::read_to_string(&path).await {
                Ok(content) => {
                    texts.push(content);
                    source_files.push(
                        path.file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_default(),
                    );
                }
                Err(e) => warn!(file = %path.display(), error = %e, "Skipping unreadable file"),
            }
        }

        let text = texts.join("\n");
        info!(
            dir = %self.input_dir.display(),
            files = source_files.len(),
            chars = text.chars().count(),
            "Loaded corpus"
        );
        Ok(Corpus::new(text, source_files))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn loads_txt_files_in_name_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "second").await.unwrap();
        fs::write(temp.path().join("a.txt"), "first").await.unwrap();
        fs::write(temp.path().join("notes.md"), "ignored").await.unwrap();

        let corpus = FsCorpusSource::new(temp.path()).load().await.unwrap();

        assert_eq!(corpus.text, "first\nsecond");
        assert_eq!(corpus.source_files, vec!["a.txt", "b.txt"]);
    }

    #[tokio::test]
    async fn subdirectories_are_not_searched() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested.txt")).await.unwrap();
        fs::write(temp.path().join("nested.txt").join("inner.txt"), "deep")
            .await
            .unwrap();

        let corpus = FsCorpusSource::new(temp.path()).load().await.unwrap();
        assert!(corpus.is_empty());
        assert!(corpus.source_files.is_empty());
    }

    #[tokio::test]
    async fn missing_directory_is_an_empty_corpus() {
        let temp = TempDir::new().unwrap();
        let corpus = FsCorpusSource::new(temp.path().join("nope")).load().await.unwrap();
        assert!(corpus.is_empty());
    }

    #[tokio::test]
    async fn invalid_utf8_files_are_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.txt"), [0xff, 0xfe, 0x00])
            .await
            .unwrap();
        fs::write(temp.path().join("good.txt"), "readable").await.unwrap();

        let corpus = FsCorpusSource::new(temp.path()).load().await.unwrap();
        assert_eq!(corpus.text, "readable");
        assert_eq!(corpus.source_files, vec!["good.txt"]);
    }
}
