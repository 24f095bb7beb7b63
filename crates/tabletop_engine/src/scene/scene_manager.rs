//! Scene preparation and per-object rendering
//!
//! `SceneManager` owns everything the scene draws with: the shader uniform
//! sink, the texture registry, the material catalog, the lights and the mesh
//! library. `prepare_scene` fills them once; `render_scene` walks the object
//! table every frame and performs the same render step for each entry.

use std::path::Path;

use thiserror::Error;

use crate::foundation::math::{ModelTransform, Vec2, Vec4};
use crate::render::lighting::SceneLights;
use crate::render::material::{MaterialCatalog, TextureBackend, TextureError, TextureRegistry};
use crate::render::primitives::{MeshError, MeshLibrary};
use crate::render::uniforms::{names, ShaderUniforms};

use super::objects::{tabletop_objects, SceneObject, Surface, TABLETOP_TEXTURES};

/// Flat color drawn in place of a texture that failed to load
pub const MISSING_TEXTURE_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.0];

/// Scene errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// No texture is registered under the tag
    #[error("No texture registered under tag '{0}'")]
    TextureNotFound(String),

    /// No material is defined under the tag
    #[error("No material defined under tag '{0}'")]
    MaterialNotFound(String),

    /// Texture registry failure
    #[error(transparent)]
    Texture(#[from] TextureError),

    /// Mesh upload or draw failure
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Owns the scene resources and renders the object table
pub struct SceneManager<U: ShaderUniforms, B: TextureBackend, M: MeshLibrary> {
    uniforms: U,
    textures: TextureRegistry<B>,
    materials: MaterialCatalog,
    lights: SceneLights,
    meshes: M,
    objects: Vec<SceneObject>,
}

impl<U: ShaderUniforms, B: TextureBackend, M: MeshLibrary> SceneManager<U, B, M> {
    /// Create a manager for the tabletop scene
    pub fn new(uniforms: U, texture_backend: B, meshes: M) -> Self {
        Self::with_objects(uniforms, texture_backend, meshes, tabletop_objects())
    }

    /// Create a manager that renders a custom object table
    pub fn with_objects(uniforms: U, texture_backend: B, meshes: M, objects: Vec<SceneObject>) -> Self {
        Self {
            uniforms,
            textures: TextureRegistry::new(texture_backend),
            materials: MaterialCatalog::new(),
            lights: SceneLights::tabletop(),
            meshes,
            objects,
        }
    }

    /// Define materials, write lights, load and bind textures, and upload meshes
    ///
    /// A texture that fails to load is logged and skipped; objects using it
    /// are drawn with [`MISSING_TEXTURE_COLOR`]. Mesh upload failures are
    /// returned.
    pub fn prepare_scene(&mut self, textures_dir: &Path) -> Result<(), SceneError> {
        self.materials.define_object_materials();
        self.lights.apply(&mut self.uniforms);

        let mut failed = 0;
        for source in &TABLETOP_TEXTURES {
            let path = source.path_in(textures_dir);
            if let Err(e) = self.textures.register_file(&path, source.tag, source.params()) {
                log::warn!("Texture '{}' unavailable, continuing without it: {}", source.tag, e);
                failed += 1;
            }
        }
        self.textures.bind_all();

        self.meshes.load_all()?;

        log::info!(
            "Scene prepared: {} materials, {} of {} textures, {} objects",
            self.materials.len(),
            self.textures.len(),
            TABLETOP_TEXTURES.len(),
            self.objects.len()
        );
        if failed > 0 {
            log::warn!("{} textures failed to load from {}", failed, textures_dir.display());
        }
        Ok(())
    }

    /// Render every object of the table in order
    pub fn render_scene(&mut self) -> Result<(), SceneError> {
        for index in 0..self.objects.len() {
            let object = self.objects[index];
            self.render_object(&object)?;
        }
        Ok(())
    }

    /// Transform, surface, material and draw call for one object
    ///
    /// Missing textures and materials degrade the object and are logged; only
    /// mesh failures are returned.
    pub fn render_object(&mut self, object: &SceneObject) -> Result<(), SceneError> {
        self.set_transformations(&object.transform);
        self.set_texture_uv_scale(object.uv_scale.x, object.uv_scale.y);

        let surface = match object.surface {
            Surface::Color(color) => {
                self.set_shader_color(color);
                Ok(())
            }
            Surface::Texture(tag) => self.set_shader_texture(tag),
            Surface::Textured { base, overlay, mix } => self.set_two_textures(base, overlay, mix),
        };
        if let Err(e) = surface {
            log::warn!("{}: {}; drawing flat color", object.name, e);
            self.set_shader_color(Vec4::from(MISSING_TEXTURE_COLOR));
        }

        if let Err(e) = self.set_shader_material(object.material) {
            log::warn!("{}: {}; keeping previous material", object.name, e);
        }

        self.meshes.draw_mesh(object.shape)?;
        Ok(())
    }

    /// Write the model matrix
    pub fn set_transformations(&mut self, transform: &ModelTransform) {
        self.uniforms.set_mat4(names::MODEL, &transform.to_matrix());
    }

    /// Draw with a flat RGBA color instead of textures
    pub fn set_shader_color(&mut self, color: Vec4) {
        self.uniforms.set_bool(names::USE_TEXTURE, false);
        self.uniforms.set_vec4(names::OBJECT_COLOR, color);
    }

    /// Sample a single registered texture
    pub fn set_shader_texture(&mut self, tag: &str) -> Result<(), SceneError> {
        let slot = self
            .textures
            .slot(tag)
            .ok_or_else(|| SceneError::TextureNotFound(tag.to_string()))?;

        self.uniforms.set_bool(names::USE_TEXTURE, true);
        self.uniforms.set_bool(names::BLEND_TEXTURE, false);
        self.uniforms.set_sampler_2d(names::OBJECT_TEXTURE, slot);
        Ok(())
    }

    /// Sample two registered textures blended by `mix`
    ///
    /// With identical tags or a zero factor only the first texture is visible.
    pub fn set_two_textures(&mut self, tag1: &str, tag2: &str, mix: f32) -> Result<(), SceneError> {
        let first = self
            .textures
            .slot(tag1)
            .ok_or_else(|| SceneError::TextureNotFound(tag1.to_string()))?;
        let second = self
            .textures
            .slot(tag2)
            .ok_or_else(|| SceneError::TextureNotFound(tag2.to_string()))?;

        self.uniforms.set_float(names::MIX_FACTOR, mix);
        self.uniforms.set_bool(names::USE_TEXTURE, true);
        self.uniforms.set_bool(names::BLEND_TEXTURE, true);

        self.textures.bind_slot(first)?;
        self.textures.bind_slot(second)?;

        self.uniforms.set_sampler_2d(names::OBJECT_TEXTURE, first);
        self.uniforms.set_sampler_2d(names::TEXTURE2, second);
        Ok(())
    }

    /// Write the texture coordinate scale
    pub fn set_texture_uv_scale(&mut self, u: f32, v: f32) {
        self.uniforms.set_vec2(names::UV_SCALE, Vec2::new(u, v));
    }

    /// Write the material registered under `tag`
    ///
    /// On a miss nothing is written, so the previous material stays active.
    pub fn set_shader_material(&mut self, tag: &str) -> Result<(), SceneError> {
        let material = self
            .materials
            .find(tag)
            .ok_or_else(|| SceneError::MaterialNotFound(tag.to_string()))?;
        material.apply(&mut self.uniforms);
        Ok(())
    }

    /// Delete every texture
    pub fn release_textures(&mut self) {
        self.textures.release_all();
    }

    /// Uniform sink, for per-frame camera writes
    pub fn uniforms_mut(&mut self) -> &mut U {
        &mut self.uniforms
    }

    /// Uniform sink
    pub fn uniforms(&self) -> &U {
        &self.uniforms
    }

    /// Texture registry
    pub fn textures(&self) -> &TextureRegistry<B> {
        &self.textures
    }

    /// Material catalog
    pub fn materials(&self) -> &MaterialCatalog {
        &self.materials
    }

    /// Scene lights
    pub fn lights(&self) -> &SceneLights {
        &self.lights
    }

    /// Mesh library
    pub fn meshes(&self) -> &M {
        &self.meshes
    }

    /// Object table
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
}
