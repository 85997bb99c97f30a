use gl::types::*;
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    ffi::CStr,
};

use crate::driver::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CreateShader(ShaderStage, GLuint),
    CompileShader(GLuint),
    DeleteShader(GLuint),
    CreateProgram(GLuint),
    AttachShader(GLuint, GLuint),
    LinkProgram(GLuint),
    DeleteProgram(GLuint),
    UseProgram(GLuint),
    Uniform1i(GLint, GLint),
    Uniform1f(GLint, GLfloat),
    Uniform2f(GLint, GLfloat, GLfloat),
    Uniform4f(GLint, GLfloat, GLfloat, GLfloat, GLfloat),
}

/// Records every driver call and answers status queries from its settings.
#[derive(Default)]
pub struct MockDriver {
    pub calls: RefCell<Vec<Call>>,
    pub sources: RefCell<HashMap<GLuint, String>>,
    pub stages: RefCell<HashMap<GLuint, ShaderStage>>,
    pub failing_stage: Option<(ShaderStage, String)>,
    pub link_failure: Option<String>,
    pub uniforms: HashMap<String, GLint>,
    next_id: Cell<GLuint>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_compile(stage: ShaderStage, log: &str) -> Self {
        Self {
            failing_stage: Some((stage, log.to_owned())),
            ..Self::default()
        }
    }

    pub fn failing_link(log: &str) -> Self {
        Self {
            link_failure: Some(log.to_owned()),
            ..Self::default()
        }
    }

    pub fn with_uniforms(names: &[&str]) -> Self {
        Self {
            uniforms: names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.to_string(), i as GLint))
                .collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn source_of(&self, stage: ShaderStage) -> Option<String> {
        let stages = self.stages.borrow();
        let id = stages.iter().find(|(_, s)| **s == stage).map(|(id, _)| *id)?;
        self.sources.borrow().get(&id).cloned()
    }

    fn next_id(&self) -> GLuint {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl GlDriver for MockDriver {
    fn create_shader(&self, stage: ShaderStage) -> GLuint {
        let id = self.next_id();
        self.stages.borrow_mut().insert(id, stage);
        self.record(Call::CreateShader(stage, id));
        id
    }

    fn compile_shader(&self, shader: GLuint, source: &CStr) {
        self.sources
            .borrow_mut()
            .insert(shader, source.to_string_lossy().into_owned());
        self.record(Call::CompileShader(shader));
    }

    fn shader_compiled(&self, shader: GLuint) -> bool {
        match &self.failing_stage {
            Some((stage, _)) => self.stages.borrow().get(&shader) != Some(stage),
            None => true,
        }
    }

    fn shader_info_log(&self, _shader: GLuint) -> String {
        self.failing_stage
            .as_ref()
            .map(|(_, log)| log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: GLuint) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> GLuint {
        let id = self.next_id();
        self.record(Call::CreateProgram(id));
        id
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: GLuint) {
        self.record(Call::LinkProgram(program));
    }

    fn program_linked(&self, _program: GLuint) -> bool {
        self.link_failure.is_none()
    }

    fn program_info_log(&self, _program: GLuint) -> String {
        self.link_failure.clone().unwrap_or_default()
    }

    fn delete_program(&self, program: GLuint) {
        self.record(Call::DeleteProgram(program));
    }

    fn use_program(&self, program: GLuint) {
        self.record(Call::UseProgram(program));
    }

    fn uniform_location(&self, _program: GLuint, name: &CStr) -> GLint {
        self.uniforms
            .get(name.to_string_lossy().as_ref())
            .copied()
            .unwrap_or(-1)
    }

    fn uniform_1i(&self, location: GLint, value: GLint) {
        self.record(Call::Uniform1i(location, value));
    }

    fn uniform_1f(&self, location: GLint, value: GLfloat) {
        self.record(Call::Uniform1f(location, value));
    }

    fn uniform_2f(&self, location: GLint, x: GLfloat, y: GLfloat) {
        self.record(Call::Uniform2f(location, x, y));
    }

    fn uniform_4f(&self, location: GLint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) {
        self.record(Call::Uniform4f(location, x, y, z, w));
    }
}
