// ShaderProg
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use gl::types::*;

use crate::{driver::*, source::*};

/// Problems found while building a shader program.
///
/// The best-effort constructor only logs these; the strict builder returns
/// the first one.
#[allow(clippy::enum_variant_names)]
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum ShaderError {
    #[error("{0}")]
    FileError(MissingFile),
    #[error("Shader compilation error of type: {stage}\n{log}")]
    CompileError { stage: ShaderStage, log: String },
    #[error("Program linking error of type: PROGRAM\n{0}")]
    LinkError(String),
}

/// A compiled shader unit, deleted when dropped.
///
/// Compilation failures do not prevent construction; query [`status`] to
/// find out whether the unit compiled.
///
/// [`status`]: CompiledShader::status
pub struct CompiledShader<'gl, D: GlDriver + ?Sized> {
    gl: &'gl D,
    id: GLuint,
    stage: ShaderStage,
}

impl<'gl, D: GlDriver + ?Sized> CompiledShader<'gl, D> {
    pub fn compile(gl: &'gl D, stage: ShaderStage, source: &str) -> Self {
        let source = to_c_source(source);
        let id = gl.create_shader(stage);
        gl.compile_shader(id, &source);
        Self { gl, id, stage }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn status(&self) -> Result<(), ShaderError> {
        if self.gl.shader_compiled(self.id) {
            Ok(())
        } else {
            Err(ShaderError::CompileError {
                stage: self.stage,
                log: self.gl.shader_info_log(self.id),
            })
        }
    }
}

impl<D: GlDriver + ?Sized> Drop for CompiledShader<'_, D> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.id);
    }
}
