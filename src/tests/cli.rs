use pretty_assertions::assert_eq;
use std::path::PathBuf;

use shaderprog::{ShaderStage, SourcePaths};

use super::super::cli::*;

#[test]
fn test_three_files() {
    let config =
        parse_args_from(["shaderprog", "common.glsl", "quad.vert", "image.frag"]).unwrap();

    assert_eq!(
        config,
        CliConfig {
            input: Input::Files(SourcePaths::new("common.glsl", "quad.vert", "image.frag")),
            stage: ShaderStage::Fragment,
            quiet: false,
        }
    );
    assert_eq!(
        config.source_paths().unwrap(),
        SourcePaths::new("common.glsl", "quad.vert", "image.frag")
    );
}

#[test]
fn test_manifest_and_options() {
    let config =
        parse_args_from(["shaderprog", "--stage", "vertex", "-q", "program.toml"]).unwrap();

    assert_eq!(config.input, Input::Manifest(PathBuf::from("program.toml")));
    assert_eq!(config.stage, ShaderStage::Vertex);
    assert!(config.quiet);
}

#[test]
fn test_two_files_is_invalid() {
    let result = parse_args_from(["shaderprog", "quad.vert", "image.frag"]);
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}

#[test]
fn test_unknown_stage_is_a_usage_error() {
    let result = parse_args_from(["shaderprog", "--stage", "geometry", "program.toml"]);
    assert!(matches!(result, Err(CliError::Usage(_))));
}

#[test]
fn test_missing_manifest_file() {
    let config = parse_args_from(["shaderprog", "/nonexistent/program.toml"]).unwrap();
    assert!(matches!(
        config.source_paths(),
        Err(CliError::Manifest(_))
    ));
}
