// ShaderProg
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line interface.
//!
//! Accepts either a TOML manifest or the three shader files directly and
//! produces a [`CliConfig`].

use std::{ffi::OsString, path::PathBuf};

use clap::{Arg, ArgAction, Command};
use thiserror::Error;

use shaderprog::{Manifest, ManifestError, ShaderStage, SourcePaths};

use crate::*;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Usage(#[from] clap::Error),
}

/// Where the shader files come from.
#[derive(Debug, PartialEq)]
pub enum Input {
    Manifest(PathBuf),
    Files(SourcePaths),
}

#[derive(Debug, PartialEq)]
pub struct CliConfig {
    pub input: Input,

    /// Stage whose assembled source is printed.
    pub stage: ShaderStage,

    /// Log warnings and errors only.
    pub quiet: bool,
}

impl CliConfig {
    /// Resolves the shader file paths, reading the manifest if one was given.
    pub fn source_paths(&self) -> Result<SourcePaths, CliError> {
        match &self.input {
            Input::Files(paths) => Ok(paths.clone()),
            Input::Manifest(path) => {
                let manifest = Manifest::load(path)?;
                log::info!("Loaded {}", path.display());
                if !manifest.uniforms.is_empty() {
                    log::debug!("{} uniform value(s) declared", manifest.uniforms.len());
                }
                Ok(manifest.source_paths())
            }
        }
    }
}

pub fn parse_args() -> Result<CliConfig, CliError> {
    parse_args_from(std::env::args_os())
}

/// Parses `args`, the first of which is the program name.
pub fn parse_args_from<I, T>(args: I) -> Result<CliConfig, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;

    let mut files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let input = match files.len() {
        1 => Input::Manifest(files.remove(0)),
        3 => {
            let fragment = files.remove(2);
            let vertex = files.remove(1);
            let common = files.remove(0);
            Input::Files(SourcePaths::new(common, vertex, fragment))
        }
        n => {
            return Err(CliError::InvalidInput(format!(
                "expected a manifest or three shader files, got {n} argument(s)"
            )))
        }
    };

    let stage = match matches.get_one::<String>("stage").map(String::as_str) {
        Some("vertex") => ShaderStage::Vertex,
        _ => ShaderStage::Fragment,
    };

    Ok(CliConfig {
        input,
        stage,
        quiet: matches.get_flag("quiet"),
    })
}

fn command() -> Command {
    Command::new(APP_NAME)
        .author(APP_AUTHOR)
        .version(APP_SEMVER)
        .about(APP_ABOUT)
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("TOML manifest, or COMMON VERTEX FRAGMENT shader files")
                .num_args(1..=3)
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stage")
                .long("stage")
                .value_name("STAGE")
                .help("Stage whose assembled source is printed")
                .value_parser(["vertex", "fragment"])
                .default_value("fragment"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log warnings and errors")
                .action(ArgAction::SetTrue),
        )
        .after_help("Exits with 1 when a shader file could not be read")
}
