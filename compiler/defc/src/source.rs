//! Definition source files.
//!
//! A `SourceFile` is the raw body of one definition file split into trimmed
//! lines. The file handle lives only for the duration of [`SourceFile::read`].

use std::fs;
use std::path::{Component, Path, PathBuf};

use defc_ir::{is_identifier, DefinitionHeader};
use defc_parse::is_blank_or_comment;

use crate::CompileError;

/// One line of a definition file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceLine {
    /// 1-based line number; synthetic lines continue the numbering.
    pub number: usize,
    /// Line text with surrounding whitespace removed.
    pub text: String,
}

/// The ordered lines of one definition file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceFile {
    pub lines: Vec<SourceLine>,
}

impl SourceFile {
    /// Read `path` (relative to `base_dir`).
    pub fn read(base_dir: &Path, path: &Path) -> Result<Self, CompileError> {
        let text = fs::read_to_string(base_dir.join(path)).map_err(|source| {
            CompileError::ImportResolution {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::from_text(&text))
    }

    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(idx, line)| SourceLine {
                number: idx + 1,
                text: line.trim().to_string(),
            })
            .collect();
        SourceFile { lines }
    }

    /// Append a line that is not in the file but goes through the same
    /// pipeline as the ones that are.
    pub fn push_synthetic(&mut self, text: impl Into<String>) {
        let number = self.lines.last().map_or(1, |line| line.number + 1);
        self.lines.push(SourceLine {
            number,
            text: text.into(),
        });
    }

    /// Lines that are neither blank nor whole-line comments, in order.
    pub fn content_lines(&self) -> impl Iterator<Item = &SourceLine> {
        self.lines
            .iter()
            .filter(|line| !is_blank_or_comment(&line.text))
    }
}

/// Drop `.` components so one file reached through different spellings maps
/// to one cache key.
pub fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Derive name and generated-artifact path from a definition's path.
pub fn header_for(path: &Path, header_extension: &str) -> Result<DefinitionHeader, CompileError> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !is_identifier(&name) {
        return Err(CompileError::InvalidDefinitionName {
            path: path.to_path_buf(),
            name,
        });
    }
    Ok(DefinitionHeader {
        name,
        source_path: path.to_path_buf(),
        import_path: path.with_extension(header_extension),
    })
}
