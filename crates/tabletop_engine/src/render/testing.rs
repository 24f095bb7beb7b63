//! Recording doubles for the renderer traits
//!
//! These stand in for the OpenGL implementations in unit tests and record
//! every call so tests can assert on the resulting GPU state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::assets::ImageData;
use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use crate::render::material::{TextureBackend, TextureError, TextureHandle, TextureParams, TextureSlot};
use crate::render::primitives::{MeshError, MeshLibrary, ShapeKind};
use crate::render::uniforms::ShaderUniforms;

/// One recorded uniform write
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Mat4(Mat4),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Float(f32),
    Int(i32),
    Bool(bool),
    Sampler(i32),
}

/// Uniform sink that remembers every write in order
#[derive(Debug, Default)]
pub struct RecordingUniforms {
    pub writes: Vec<(String, UniformValue)>,
    latest: HashMap<String, UniformValue>,
}

impl RecordingUniforms {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, name: &str, value: UniformValue) {
        self.latest.insert(name.to_string(), value.clone());
        self.writes.push((name.to_string(), value));
    }

    /// Most recent value written to `name`
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.latest.get(name)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            UniformValue::Bool(value) => Some(*value),
            UniformValue::Int(value) => Some(*value != 0),
            _ => None,
        }
    }

    pub fn sampler(&self, name: &str) -> Option<i32> {
        match self.get(name)? {
            UniformValue::Sampler(unit) => Some(*unit),
            _ => None,
        }
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name)? {
            UniformValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn vec3(&self, name: &str) -> Option<Vec3> {
        match self.get(name)? {
            UniformValue::Vec3(value) => Some(*value),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.writes.clear();
        self.latest.clear();
    }
}

impl ShaderUniforms for RecordingUniforms {
    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.record(name, UniformValue::Mat4(*value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.record(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.record(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.record(name, UniformValue::Vec4(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, UniformValue::Float(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.record(name, UniformValue::Int(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.record(name, UniformValue::Bool(value));
    }

    fn set_sampler_2d(&mut self, name: &str, slot: TextureSlot) {
        self.record(name, UniformValue::Sampler(slot.unit_index()));
    }
}

/// Everything the recording texture backend has seen
#[derive(Debug, Default)]
pub struct TextureLog {
    pub created: Vec<(TextureHandle, TextureParams, u8)>,
    pub bound: Vec<(TextureSlot, TextureHandle)>,
    pub deleted: Vec<TextureHandle>,
}

/// Texture backend that hands out sequential handles starting at 1
///
/// The log is shared so it stays readable after the registry that owns the
/// backend has been dropped.
#[derive(Debug, Clone)]
pub struct RecordingTextureBackend {
    pub log: Rc<RefCell<TextureLog>>,
    next_handle: u32,
}

impl RecordingTextureBackend {
    pub fn new() -> Self {
        Self {
            log: Rc::default(),
            next_handle: 1,
        }
    }
}

impl TextureBackend for RecordingTextureBackend {
    fn create_texture(&mut self, image: &ImageData, params: &TextureParams) -> Result<TextureHandle, TextureError> {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.log.borrow_mut().created.push((handle, *params, image.channels));
        Ok(handle)
    }

    fn bind_texture(&mut self, slot: TextureSlot, texture: TextureHandle) {
        self.log.borrow_mut().bound.push((slot, texture));
    }

    fn delete_texture(&mut self, texture: TextureHandle) {
        self.log.borrow_mut().deleted.push(texture);
    }
}

/// Mesh library that records loads and draws
#[derive(Debug, Default)]
pub struct RecordingMeshes {
    pub loaded: Vec<ShapeKind>,
    pub drawn: Vec<ShapeKind>,
}

impl MeshLibrary for RecordingMeshes {
    fn load_mesh(&mut self, shape: ShapeKind) -> Result<(), MeshError> {
        if !self.loaded.contains(&shape) {
            self.loaded.push(shape);
        }
        Ok(())
    }

    fn draw_mesh(&mut self, shape: ShapeKind) -> Result<(), MeshError> {
        if !self.loaded.contains(&shape) {
            return Err(MeshError::NotLoaded(shape));
        }
        self.drawn.push(shape);
        Ok(())
    }
}

/// Write a small RGB PNG into the temp directory and return its path
pub fn write_rgb_png(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("tabletop_{}_{}.png", std::process::id(), name));
    image::RgbImage::from_pixel(2, 2, image::Rgb([200, 120, 40]))
        .save(&path)
        .unwrap();
    path
}

/// Write a single-channel PNG into the temp directory and return its path
pub fn write_gray_png(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("tabletop_{}_{}.png", std::process::id(), name));
    image::GrayImage::from_pixel(2, 2, image::Luma([90]))
        .save(&path)
        .unwrap();
    path
}
