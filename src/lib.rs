// ShaderProg
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loads, compiles and links OpenGL shader programs.
//!
//! A program is made of a vertex stage and a fragment stage read from
//! files, with a shared "common" prelude prepended to the fragment stage.
//! Build problems are logged and collected rather than raised, which keeps
//! iterative shader editing going even when a stage fails to compile.
//!
//! ```no_run
//! use shaderprog::{NativeGl, ShaderProgram};
//!
//! let gl = NativeGl::load_from_epoxy()?;
//! let program = ShaderProgram::new(&gl, "common.glsl", "quad.vert", "image.frag");
//! program.use_program();
//! program.set_float("iTime", 0.5);
//! program.set_vec2("iResolution", [800.0, 600.0]);
//! # Ok::<(), shaderprog::driver::LoadError>(())
//! ```

pub mod driver;
pub mod manifest;
pub mod program;
pub mod shader;
pub mod source;
pub mod uniform;

pub use driver::{GlDriver, NativeGl, ShaderStage};
pub use manifest::{Manifest, ManifestError};
pub use program::{BuildReport, ShaderProgram};
pub use shader::ShaderError;
pub use source::{SourceKind, SourcePaths, StageSources};
pub use uniform::{UniformValue, Vec2};
