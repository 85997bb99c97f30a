// ShaderProg
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Seam between the shader wrapper and the graphics driver.
//!
//! OpenGL keeps its state in an implicit per-thread context. [`GlDriver`]
//! makes that context an explicit value so that [`ShaderProgram`] can be
//! driven by the real bindings ([`NativeGl`]) or by a test double.
//!
//! [`ShaderProgram`]: crate::program::ShaderProgram

#[cfg(test)]
mod tests {
    mod native;
}
mod native;

use gl::types::*;
use std::{ffi::CStr, fmt};

pub use native::{LoadError, NativeGl};

/// Programmable pipeline stage of a shader unit.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("VERTEX"),
            ShaderStage::Fragment => f.write_str("FRAGMENT"),
        }
    }
}

/// Subset of the OpenGL API used to build and feed a shader program.
///
/// All calls are expected on the thread that owns the current GL context.
/// Methods take `&self` because the driver state is global to the context.
pub trait GlDriver {
    fn create_shader(&self, stage: ShaderStage) -> GLuint;

    /// Assigns `source` to `shader` and compiles it.
    fn compile_shader(&self, shader: GLuint, source: &CStr);

    fn shader_compiled(&self, shader: GLuint) -> bool;

    fn shader_info_log(&self, shader: GLuint) -> String;

    fn delete_shader(&self, shader: GLuint);

    fn create_program(&self) -> GLuint;

    fn attach_shader(&self, program: GLuint, shader: GLuint);

    fn link_program(&self, program: GLuint);

    fn program_linked(&self, program: GLuint) -> bool;

    fn program_info_log(&self, program: GLuint) -> String;

    fn delete_program(&self, program: GLuint);

    fn use_program(&self, program: GLuint);

    /// Returns `-1` when `name` is not an active uniform of `program`.
    fn uniform_location(&self, program: GLuint, name: &CStr) -> GLint;

    fn uniform_1i(&self, location: GLint, value: GLint);

    fn uniform_1f(&self, location: GLint, value: GLfloat);

    fn uniform_2f(&self, location: GLint, x: GLfloat, y: GLfloat);

    fn uniform_4f(&self, location: GLint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
}
