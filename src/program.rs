// ShaderProg
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Linked shader program and its uniform setters.

use gl::types::*;
use std::{ffi::CString, path::Path};

use crate::{driver::*, manifest::*, shader::*, source::*, uniform::*};

/// Diagnostics collected while building a [`ShaderProgram`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuildReport {
    /// In build order: missing files, vertex compile, fragment compile, link.
    pub errors: Vec<ShaderError>,
}

impl BuildReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn first_error(&self) -> Option<&ShaderError> {
        self.errors.first()
    }

    fn record(&mut self, error: ShaderError) {
        log::error!("{error}");
        self.errors.push(error);
    }
}

/// A linked GPU program built from a common prelude, a vertex stage and a
/// fragment stage.
///
/// Building never fails from the caller's point of view: missing files,
/// compile errors and link errors are logged and kept in [`report`].
/// [`ShaderProgram::build`] is the variant that turns them into an error.
///
/// The program object is deleted when this value is dropped.
///
/// [`report`]: ShaderProgram::report
pub struct ShaderProgram<'gl, D: GlDriver + ?Sized> {
    gl: &'gl D,
    id: GLuint,
    sources: StageSources,
    report: BuildReport,
}

impl<'gl, D: GlDriver + ?Sized> ShaderProgram<'gl, D> {
    pub fn new(
        gl: &'gl D,
        common_path: impl AsRef<Path>,
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Self {
        let paths = SourcePaths::new(
            common_path.as_ref(),
            vertex_path.as_ref(),
            fragment_path.as_ref(),
        );
        Self::from_paths(gl, &paths)
    }

    pub fn from_paths(gl: &'gl D, paths: &SourcePaths) -> Self {
        Self::from_sources(gl, StageSources::load(paths))
    }

    /// Builds the program described by `manifest` and writes its initial
    /// uniform values, leaving the program active.
    pub fn from_manifest(gl: &'gl D, manifest: &Manifest) -> Self {
        let program = Self::from_paths(gl, &manifest.source_paths());
        if !manifest.uniforms.is_empty() {
            program.use_program();
            program.apply_uniforms(&manifest.uniforms);
        }
        program
    }

    pub fn from_sources(gl: &'gl D, sources: StageSources) -> Self {
        let mut report = BuildReport::default();
        for file in &sources.missing {
            report.errors.push(ShaderError::FileError(file.clone()));
        }

        let vertex = CompiledShader::compile(gl, ShaderStage::Vertex, &sources.vertex);
        if let Err(err) = vertex.status() {
            report.record(err);
        }
        let fragment = CompiledShader::compile(gl, ShaderStage::Fragment, &sources.fragment);
        if let Err(err) = fragment.status() {
            report.record(err);
        }

        let id = gl.create_program();
        gl.attach_shader(id, vertex.id());
        gl.attach_shader(id, fragment.id());
        gl.link_program(id);
        if !gl.program_linked(id) {
            report.record(ShaderError::LinkError(gl.program_info_log(id)));
        }

        // Linked units are no longer needed.
        drop(vertex);
        drop(fragment);

        if report.is_ok() {
            log::info!("Shader program {id} loaded");
        } else {
            log::warn!(
                "Shader program {id} loaded with {} error(s)",
                report.errors.len()
            );
        }

        Self {
            gl,
            id,
            sources,
            report,
        }
    }

    /// Like [`ShaderProgram::from_paths`], but fails with the first problem
    /// found. The partially built program is released on failure.
    pub fn build(gl: &'gl D, paths: &SourcePaths) -> Result<Self, ShaderError> {
        let program = Self::from_paths(gl, paths);
        if let Some(err) = program.report.first_error().cloned() {
            return Err(err);
        }
        Ok(program)
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn sources(&self) -> &StageSources {
        &self.sources
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn use_program(&self) {
        self.gl.use_program(self.id);
    }

    /// Deletes the program object now.
    pub fn release(self) {
        drop(self);
    }

    /// Gives up ownership of the program object without deleting it.
    pub fn into_raw(mut self) -> GLuint {
        std::mem::replace(&mut self.id, 0)
    }

    pub fn set_bool(&self, name: &str, value: bool) {
        if let Some(location) = self.uniform_location(name) {
            self.gl.uniform_1i(location, value as GLint);
        }
    }

    pub fn set_int(&self, name: &str, value: i32) {
        if let Some(location) = self.uniform_location(name) {
            self.gl.uniform_1i(location, value);
        }
    }

    pub fn set_float(&self, name: &str, value: f32) {
        if let Some(location) = self.uniform_location(name) {
            self.gl.uniform_1f(location, value);
        }
    }

    /// Binds a sampler uniform to texture unit `unit`.
    pub fn set_sampler(&self, name: &str, unit: u32) {
        if let Some(location) = self.uniform_location(name) {
            self.gl.uniform_1i(location, unit as GLint);
        }
    }

    pub fn set_vec2(&self, name: &str, value: impl Into<Vec2>) {
        let Vec2 { x, y } = value.into();
        if let Some(location) = self.uniform_location(name) {
            self.gl.uniform_2f(location, x, y);
        }
    }

    pub fn set_vec4(&self, name: &str, value: [f32; 4]) {
        let [x, y, z, w] = value;
        if let Some(location) = self.uniform_location(name) {
            self.gl.uniform_4f(location, x, y, z, w);
        }
    }

    pub fn set_uniform(&self, name: &str, value: UniformValue) {
        match value {
            UniformValue::Bool(value) => self.set_bool(name, value),
            UniformValue::Int(value) => self.set_int(name, value),
            UniformValue::Float(value) => self.set_float(name, value),
            UniformValue::Vec2(value) => self.set_vec2(name, value),
            UniformValue::Vec4(value) => self.set_vec4(name, value),
            UniformValue::Sampler { sampler } => self.set_sampler(name, sampler),
        }
    }

    /// Writes each value to the uniform of the same name.
    ///
    /// Uniform writes go to the active program, so call
    /// [`use_program`](ShaderProgram::use_program) first.
    pub fn apply_uniforms<'a>(
        &self,
        uniforms: impl IntoIterator<Item = (&'a String, &'a UniformValue)>,
    ) {
        for (name, value) in uniforms {
            self.set_uniform(name, *value);
        }
    }

    /// Looks up `name` in the linked program.
    ///
    /// Unknown names resolve to `-1`, which the driver ignores on write.
    /// Only names that cannot be expressed as a C string yield `None`.
    pub fn uniform_location(&self, name: &str) -> Option<GLint> {
        match CString::new(name) {
            Ok(c_name) => Some(self.gl.uniform_location(self.id, &c_name)),
            Err(_) => {
                log::debug!("Uniform name {name:?} contains a NUL byte; ignored");
                None
            }
        }
    }
}

impl<D: GlDriver + ?Sized> Drop for ShaderProgram<'_, D> {
    fn drop(&mut self) {
        if self.id != 0 {
            self.gl.delete_program(self.id);
        }
    }
}
