// ShaderProg
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use gl::types::*;
use std::{
    ffi::{c_void, CStr},
    marker::PhantomData,
    ptr,
};
use thiserror::Error;

use super::*;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load libepoxy.so.0: {0}")]
    Epoxy(#[from] libloading::Error),
    #[error("GL functions not loaded properly")]
    NotLoaded,
}

/// [`GlDriver`] backed by the `gl` crate bindings.
///
/// Can only be obtained after the GL function pointers were loaded for the
/// current context. Neither `Send` nor `Sync`: GL calls must stay on the
/// thread that owns the context, and so must every [`ShaderProgram`]
/// borrowing this driver.
///
/// [`ShaderProgram`]: crate::program::ShaderProgram
pub struct NativeGl {
    // Keeps libepoxy mapped while its function pointers are in use.
    _library: Option<libloading::os::unix::Library>,
    _not_send: PhantomData<*const ()>,
}

impl NativeGl {
    /// Loads GL function pointers with a caller-provided symbol loader,
    /// e.g. the one exposed by the windowing library that created the context.
    pub fn load_with<F>(loader: F) -> Result<Self, LoadError>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        Self::verify()?;
        Ok(Self {
            _library: None,
            _not_send: PhantomData,
        })
    }

    /// Loads GL function pointers through libepoxy.
    ///
    /// Useful when the context is owned by a toolkit that does not expose
    /// its own symbol loader (GTK, for instance).
    pub fn load_from_epoxy() -> Result<Self, LoadError> {
        let library = unsafe { libloading::os::unix::Library::new("libepoxy.so.0")? };

        epoxy::load_with(|name| {
            unsafe { library.get::<_>(name.as_bytes()) }
                .map(|symbol| *symbol)
                .unwrap_or(ptr::null())
        });
        gl::load_with(epoxy::get_proc_addr);

        Self::verify()?;
        Ok(Self {
            _library: Some(library),
            _not_send: PhantomData,
        })
    }

    fn verify() -> Result<(), LoadError> {
        if !gl::GetString::is_loaded() || !gl::CreateShader::is_loaded() {
            return Err(LoadError::NotLoaded);
        }
        let version = unsafe { gl::GetString(gl::VERSION) };
        if version.is_null() {
            return Err(LoadError::NotLoaded);
        }
        let version = unsafe { CStr::from_ptr(version as *const _) }.to_string_lossy();
        log::debug!("GL version: {version}");
        Ok(())
    }
}

impl GlDriver for NativeGl {
    fn create_shader(&self, stage: ShaderStage) -> GLuint {
        unsafe { gl::CreateShader(stage.gl_enum()) }
    }

    fn compile_shader(&self, shader: GLuint, source: &CStr) {
        unsafe {
            gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
            gl::CompileShader(shader);
        }
    }

    fn shader_compiled(&self, shader: GLuint) -> bool {
        let mut success = 0;
        unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success) };
        success != 0
    }

    fn shader_info_log(&self, shader: GLuint) -> String {
        let mut log_len = 0;
        unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut log_len) };
        let mut log: Vec<u8> = Vec::with_capacity(log_len.max(0) as usize);
        let mut written = 0;
        unsafe {
            gl::GetShaderInfoLog(shader, log_len, &mut written, log.as_mut_ptr() as *mut _);
            log.set_len(written.clamp(0, log_len.max(0)) as usize);
        }
        String::from_utf8_lossy(&log).into_owned()
    }

    fn delete_shader(&self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) };
    }

    fn create_program(&self) -> GLuint {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) };
    }

    fn link_program(&self, program: GLuint) {
        unsafe { gl::LinkProgram(program) };
    }

    fn program_linked(&self, program: GLuint) -> bool {
        let mut success = 0;
        unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut success) };
        success != 0
    }

    fn program_info_log(&self, program: GLuint) -> String {
        let mut log_len = 0;
        unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut log_len) };
        let mut log: Vec<u8> = Vec::with_capacity(log_len.max(0) as usize);
        let mut written = 0;
        unsafe {
            gl::GetProgramInfoLog(program, log_len, &mut written, log.as_mut_ptr() as *mut _);
            log.set_len(written.clamp(0, log_len.max(0)) as usize);
        }
        String::from_utf8_lossy(&log).into_owned()
    }

    fn delete_program(&self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) };
    }

    fn use_program(&self, program: GLuint) {
        unsafe { gl::UseProgram(program) };
    }

    fn uniform_location(&self, program: GLuint, name: &CStr) -> GLint {
        unsafe { gl::GetUniformLocation(program, name.as_ptr()) }
    }

    fn uniform_1i(&self, location: GLint, value: GLint) {
        unsafe { gl::Uniform1i(location, value) };
    }

    fn uniform_1f(&self, location: GLint, value: GLfloat) {
        unsafe { gl::Uniform1f(location, value) };
    }

    fn uniform_2f(&self, location: GLint, x: GLfloat, y: GLfloat) {
        unsafe { gl::Uniform2f(location, x, y) };
    }

    fn uniform_4f(&self, location: GLint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        unsafe { gl::Uniform4f(location, x, y, z, w) };
    }
}
