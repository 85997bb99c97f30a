// ShaderProg
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

#[cfg(test)]
mod tests {
    mod cli;
}
mod cli;

use std::process::ExitCode;

use shaderprog::{ShaderStage, StageSources};

pub const APP_NAME: &str = "shaderprog";
pub const APP_ABOUT: &str = "Assembles shader stage sources from a common prelude";
pub const APP_AUTHOR: &str = "Harlen Batagelo, hbatagelo@gmail.com";
pub const APP_SEMVER: &str = "1.0.0";

fn main() -> ExitCode {
    let config = match cli::parse_args() {
        Ok(config) => config,
        Err(cli::CliError::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    simple_logger::SimpleLogger::new()
        .with_level(if config.quiet {
            log::LevelFilter::Warn
        } else if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init()
        .unwrap();

    let paths = match config.source_paths() {
        Ok(paths) => paths,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::from(2);
        }
    };

    let sources = StageSources::load(&paths);
    match config.stage {
        ShaderStage::Vertex => print!("{}", sources.vertex),
        ShaderStage::Fragment => print!("{}", sources.fragment),
    }

    if sources.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
