//! Freeform notepad with plain-text import and export.
//!
//! The store itself is synchronous and never touches the filesystem; the
//! `*_path`/`*_dir` helpers are one-shot async wrappers for hosts that work
//! with real files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{NotepadError, ValidationError};
use crate::render::Color;

/// File name offered for exported notes.
pub const EXPORT_FILENAME: &str = "pomodoro-note.txt";
/// MIME type of exported notes.
pub const EXPORT_MIME: &str = "text/plain;charset=utf-8";
/// The only MIME essence accepted on import.
pub const PLAIN_TEXT_MIME: &str = "text/plain";

const DEFAULT_NOTE_COLOR: &str = "#ffffff";

/// A note ready to be handed to the host's save dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedNote {
    pub bytes: Vec<u8>,
    pub filename: &'static str,
    pub mime: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotepadStore {
    text: String,
    background_color: Color,
}

impl NotepadStore {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            background_color: Color::from_trusted(DEFAULT_NOTE_COLOR),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn background_color(&self) -> &Color {
        &self.background_color
    }

    pub fn set_background_color(&mut self, color: &str) -> Result<(), ValidationError> {
        self.background_color = Color::parse(color)?;
        Ok(())
    }

    pub fn export_as_file(&self) -> Result<ExportedNote, NotepadError> {
        if self.text.is_empty() {
            return Err(NotepadError::EmptyExportContent);
        }
        Ok(ExportedNote {
            bytes: self.text.as_bytes().to_vec(),
            filename: EXPORT_FILENAME,
            mime: EXPORT_MIME,
        })
    }

    /// Replace the note with the contents of a plain-text file.
    ///
    /// The type is checked before the bytes are decoded; on any error the
    /// current note is kept.
    pub fn import_from_file(&mut self, bytes: &[u8], declared_mime: &str) -> Result<(), NotepadError> {
        if !is_plain_text(declared_mime) {
            return Err(NotepadError::UnsupportedFileType {
                mime: declared_mime.to_string(),
            });
        }
        let text = std::str::from_utf8(bytes)
            .map_err(|e| NotepadError::FileReadFailure(e.to_string()))?;
        self.text = text.to_string();
        Ok(())
    }

    /// Read `path` and import it, declaring its type from the extension.
    pub async fn import_path(&mut self, path: &Path) -> Result<(), NotepadError> {
        let mime = mime_for_path(path);
        if !is_plain_text(mime) {
            return Err(NotepadError::UnsupportedFileType {
                mime: mime.to_string(),
            });
        }
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| NotepadError::FileReadFailure(format!("{}: {e}", path.display())))?;
        self.import_from_file(&bytes, mime)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "note imported");
        Ok(())
    }

    /// Export into `dir` under [`EXPORT_FILENAME`], returning the written path.
    pub async fn export_to_dir(&self, dir: &Path) -> Result<PathBuf, NotepadError> {
        let note = self.export_as_file()?;
        let path = dir.join(note.filename);
        tokio::fs::write(&path, &note.bytes)
            .await
            .map_err(|e| NotepadError::FileWriteFailure(format!("{}: {e}", path.display())))?;
        tracing::info!(path = %path.display(), bytes = note.bytes.len(), "note exported");
        Ok(path)
    }
}

impl Default for NotepadStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare the MIME essence, ignoring parameters and case.
fn is_plain_text(mime: &str) -> bool {
    mime.split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(PLAIN_TEXT_MIME))
        .unwrap_or(false)
}

/// Declared type of a local file, guessed from its extension the way a
/// browser file picker does.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "txt" | "text" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "html" | "htm" => "text/html",
        "csv" => "text/csv",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}
