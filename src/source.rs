// ShaderProg
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loading of shader source files.
//!
//! A program is assembled from three files: a common prelude, the vertex
//! stage and the fragment stage. The common text is prepended verbatim to
//! the fragment stage only. Missing files never abort loading; they are
//! logged and contribute empty text.

use std::{
    ffi::CString,
    fmt, fs, io,
    path::{Path, PathBuf},
};

/// Role of a source file in the assembled program.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum SourceKind {
    Common,
    Vertex,
    Fragment,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Common => f.write_str("Common"),
            SourceKind::Vertex => f.write_str("Vertex"),
            SourceKind::Fragment => f.write_str("Fragment"),
        }
    }
}

/// A source file that could not be read.
#[derive(Clone, Debug, PartialEq)]
pub struct MissingFile {
    pub kind: SourceKind,
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for MissingFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} shader file missing: {} ({})",
            self.kind,
            self.path.display(),
            self.reason
        )
    }
}

/// Paths of the three files making up a program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourcePaths {
    /// `None` means no common prelude.
    pub common: Option<PathBuf>,
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl SourcePaths {
    pub fn new(
        common: impl Into<PathBuf>,
        vertex: impl Into<PathBuf>,
        fragment: impl Into<PathBuf>,
    ) -> Self {
        Self {
            common: Some(common.into()),
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

/// Per-stage source text ready to be handed to the compiler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StageSources {
    pub vertex: String,
    /// Common prelude followed by the fragment file contents.
    pub fragment: String,
    /// Files that could not be read, in the order they were opened
    /// (vertex, fragment, common).
    pub missing: Vec<MissingFile>,
}

impl StageSources {
    /// Builds stage sources from in-memory text.
    pub fn from_parts(common: &str, vertex: &str, fragment: &str) -> Self {
        Self {
            vertex: vertex.to_owned(),
            fragment: concat_fragment(common, fragment),
            missing: Vec::new(),
        }
    }

    /// Reads the three files.
    ///
    /// Every file that fails to open is logged and read as empty text. When
    /// at least one failed, the first failure in priority order (vertex,
    /// fragment, common) is logged once more as the failed file.
    pub fn load(paths: &SourcePaths) -> Self {
        log::info!("Loading shader program");
        if let Some(common) = &paths.common {
            log::info!("Common: {}", common.display());
        }
        log::info!("Vertex: {}", paths.vertex.display());
        log::info!("Fragment: {}", paths.fragment.display());

        let mut missing = Vec::new();
        let vertex = read_or_report(SourceKind::Vertex, &paths.vertex, &mut missing);
        let fragment = read_or_report(SourceKind::Fragment, &paths.fragment, &mut missing);
        let common = match &paths.common {
            Some(path) => read_or_report(SourceKind::Common, path, &mut missing),
            None => String::new(),
        };

        let sources = Self {
            vertex,
            fragment: concat_fragment(&common, &fragment),
            missing,
        };
        if let Some(failed) = sources.first_missing() {
            log::error!("Failed file: {}", failed.path.display());
        }
        sources
    }

    /// First missing file in priority order: vertex, fragment, common.
    pub fn first_missing(&self) -> Option<&MissingFile> {
        [SourceKind::Vertex, SourceKind::Fragment, SourceKind::Common]
            .iter()
            .find_map(|kind| self.missing.iter().find(|file| file.kind == *kind))
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Concatenates the common prelude and the fragment text with nothing in
/// between.
pub fn concat_fragment(common: &str, fragment: &str) -> String {
    let mut source = String::with_capacity(common.len() + fragment.len());
    source.push_str(common);
    source.push_str(fragment);
    source
}

/// Converts source text into the C string passed to the driver.
///
/// Text after an interior NUL byte is dropped, which is what the driver
/// would see from a NUL-terminated buffer.
pub fn to_c_source(source: &str) -> CString {
    match CString::new(source) {
        Ok(c_source) => c_source,
        Err(err) => {
            let nul_position = err.nul_position();
            log::warn!("Shader source contains a NUL byte at offset {nul_position}; truncating");
            let mut bytes = err.into_vec();
            bytes.truncate(nul_position);
            // No NUL remains before `nul_position`.
            CString::new(bytes).unwrap_or_default()
        }
    }
}

fn read_or_report(kind: SourceKind, path: &Path, missing: &mut Vec<MissingFile>) -> String {
    match read_source(path) {
        Ok(text) => text,
        Err(err) => {
            let file = MissingFile {
                kind,
                path: path.to_path_buf(),
                reason: err.to_string(),
            };
            log::error!("{file}");
            missing.push(file);
            String::new()
        }
    }
}

fn read_source(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes).unwrap_or_else(|err| {
        log::warn!(
            "{} is not valid UTF-8; invalid sequences were replaced",
            path.display()
        );
        String::from_utf8_lossy(err.as_bytes()).into_owned()
    }))
}
