// ShaderProg
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::*;

/// Two-component vector accepted by [`ShaderProgram::set_vec2`].
///
/// [`ShaderProgram::set_vec2`]: crate::program::ShaderProgram::set_vec2
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

/// Value of a named uniform, as written in a manifest.
///
/// In TOML, integers map to `Int` and decimals to `Float`, so float
/// uniforms must be written with a decimal point (`1.0`, not `1`).
/// Integers outside the `i32` range are rejected.
/// Samplers are written as `{ sampler = <unit> }`.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "ManifestValue", into = "ManifestValue")]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2([f32; 2]),
    Vec4([f32; 4]),
    Sampler { sampler: u32 },
}

/// Untagged TOML form of [`UniformValue`].
///
/// Integers are read at full width so that values which do not fit a GLSL
/// `int` are reported instead of being matched as floats.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
enum ManifestValue {
    Bool(bool),
    Int(i64),
    Float(f32),
    Vec2([f32; 2]),
    Vec4([f32; 4]),
    Sampler { sampler: u32 },
}

impl TryFrom<ManifestValue> for UniformValue {
    type Error = String;

    fn try_from(value: ManifestValue) -> Result<Self, Self::Error> {
        Ok(match value {
            ManifestValue::Bool(value) => UniformValue::Bool(value),
            ManifestValue::Int(value) => UniformValue::Int(
                i32::try_from(value)
                    .map_err(|_| format!("integer uniform {value} is out of range for int"))?,
            ),
            ManifestValue::Float(value) => UniformValue::Float(value),
            ManifestValue::Vec2(value) => UniformValue::Vec2(value),
            ManifestValue::Vec4(value) => UniformValue::Vec4(value),
            ManifestValue::Sampler { sampler } => UniformValue::Sampler { sampler },
        })
    }
}

impl From<UniformValue> for ManifestValue {
    fn from(value: UniformValue) -> Self {
        match value {
            UniformValue::Bool(value) => ManifestValue::Bool(value),
            UniformValue::Int(value) => ManifestValue::Int(value.into()),
            UniformValue::Float(value) => ManifestValue::Float(value),
            UniformValue::Vec2(value) => ManifestValue::Vec2(value),
            UniformValue::Vec4(value) => ManifestValue::Vec4(value),
            UniformValue::Sampler { sampler } => ManifestValue::Sampler { sampler },
        }
    }
}
