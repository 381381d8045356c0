use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppError;

// @module: Document file utilities

/// Extension of the only document type the assistant opens
const TEXT_EXTENSION: &str = "txt";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @checks: `.txt` extension, any case
    pub fn is_text_file<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(TEXT_EXTENSION))
    }

    /// Open a plain text document
    pub fn open_text_file<P: AsRef<Path>>(path: P) -> Result<String, AppError> {
        let path = path.as_ref();
        if !Self::is_text_file(path) {
            return Err(AppError::UnsupportedFile(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::File(format!("Failed to read file {}: {}", path.display(), e)))?;
        debug!("File \"{}\" opened ({} bytes)", path.display(), content.len());
        Ok(content)
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content).with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;
        Ok(())
    }

    // @generates: `document_YYYY-MM-DD.txt` for the given date
    pub fn download_name_for(date: NaiveDate) -> String {
        format!("document_{}.{}", date.format("%Y-%m-%d"), TEXT_EXTENSION)
    }

    // @generates: Download name for today's local date
    pub fn default_download_name() -> String {
        Self::download_name_for(Local::now().date_naive())
    }

    /// Save a document, refusing empty content and existing files unless forced
    pub fn save_document<P: AsRef<Path>>(path: P, content: &str, force_overwrite: bool) -> Result<PathBuf, AppError> {
        let path = path.as_ref();
        if content.trim().is_empty() {
            return Err(AppError::NothingToSave);
        }
        if Self::file_exists(path) && !force_overwrite {
            return Err(AppError::OutputExists(path.display().to_string()));
        }

        Self::write_to_file(path, content).map_err(|e| AppError::File(format!("{:#}", e)))?;
        Ok(path.to_path_buf())
    }
}
