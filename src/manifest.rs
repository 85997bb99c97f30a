// ShaderProg
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! TOML description of a shader program.
//!
//! ```toml
//! common = "common.glsl"
//! vertex = "quad.vert"
//! fragment = "image.frag"
//!
//! [uniforms]
//! iScale = 1.0
//! iChannel0 = { sampler = 0 }
//! ```

use serde::*;
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::{source::*, uniform::*};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<PathBuf>,
    pub vertex: PathBuf,
    pub fragment: PathBuf,
    /// Initial uniform values, applied in name order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub uniforms: BTreeMap<String, UniformValue>,
}

impl Manifest {
    /// Reads a manifest file. Relative shader paths are resolved against
    /// the directory containing the manifest.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = fs::read_to_string(path)?;
        let mut manifest = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent() {
            manifest.resolve_relative_to(dir);
        }
        Ok(manifest)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(text)?)
    }

    pub fn resolve_relative_to(&mut self, dir: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        };
        if let Some(common) = &mut self.common {
            resolve(common);
        }
        resolve(&mut self.vertex);
        resolve(&mut self.fragment);
    }

    pub fn source_paths(&self) -> SourcePaths {
        SourcePaths {
            common: self.common.clone(),
            vertex: self.vertex.clone(),
            fragment: self.fragment.clone(),
        }
    }
}
