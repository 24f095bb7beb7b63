//! Shader uniform interface
//!
//! Uniforms are addressed by their GLSL names. The names below must match the
//! scene shaders exactly; struct members and array elements use the dotted and
//! indexed forms GLSL exposes (`material.shininess`, `pointLights[0].position`).

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use crate::render::material::TextureSlot;

/// Uniform names shared by the renderer and the scene shaders
pub mod names {
    /// Model matrix of the object being drawn
    pub const MODEL: &str = "model";
    /// Camera view matrix
    pub const VIEW: &str = "view";
    /// Camera projection matrix
    pub const PROJECTION: &str = "projection";
    /// Camera position for specular lighting
    pub const VIEW_POSITION: &str = "viewPosition";
    /// Flat RGBA color used when texturing is off
    pub const OBJECT_COLOR: &str = "objectColor";
    /// Sampler of the primary texture
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    /// Sampler of the blended second texture
    pub const TEXTURE2: &str = "texture2";
    /// Whether the surface samples textures
    pub const USE_TEXTURE: &str = "bUseTexture";
    /// Whether lighting is evaluated
    pub const USE_LIGHTING: &str = "bUseLighting";
    /// Whether the second texture is mixed in
    pub const BLEND_TEXTURE: &str = "bBlendTexture";
    /// Weight of the second texture
    pub const MIX_FACTOR: &str = "bMixFactor";
    /// Texture coordinate scale
    pub const UV_SCALE: &str = "UVscale";
    /// Material diffuse color
    pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
    /// Material specular color
    pub const MATERIAL_SPECULAR: &str = "material.specularColor";
    /// Material specular exponent
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    /// Name of a field of `pointLights[index]`
    pub fn point_light(index: usize, field: &str) -> String {
        format!("pointLights[{}].{}", index, field)
    }

    /// Name of a field of `spotLight`
    pub fn spot_light(field: &str) -> String {
        format!("spotLight.{}", field)
    }
}

/// Sets uniform values on the active shader program
///
/// Writes to names the program does not declare are ignored, as OpenGL does
/// for inactive uniforms.
pub trait ShaderUniforms {
    /// Set a `mat4`
    fn set_mat4(&mut self, name: &str, value: &Mat4);

    /// Set a `vec2`
    fn set_vec2(&mut self, name: &str, value: Vec2);

    /// Set a `vec3`
    fn set_vec3(&mut self, name: &str, value: Vec3);

    /// Set a `vec4`
    fn set_vec4(&mut self, name: &str, value: Vec4);

    /// Set a `float`
    fn set_float(&mut self, name: &str, value: f32);

    /// Set an `int`
    fn set_int(&mut self, name: &str, value: i32);

    /// Set a `bool` (stored as an int on the GPU)
    fn set_bool(&mut self, name: &str, value: bool) {
        self.set_int(name, i32::from(value));
    }

    /// Point a `sampler2D` at a texture unit
    fn set_sampler_2d(&mut self, name: &str, slot: TextureSlot) {
        self.set_int(name, slot.unit_index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_light_names() {
        assert_eq!(names::point_light(0, "position"), "pointLights[0].position");
        assert_eq!(names::point_light(1, "bActive"), "pointLights[1].bActive");
        assert_eq!(names::spot_light("outerCutOff"), "spotLight.outerCutOff");
    }

    /// Sink that only implements the required methods, to check the defaults
    #[derive(Default)]
    struct IntOnly {
        ints: Vec<(String, i32)>,
    }

    impl ShaderUniforms for IntOnly {
        fn set_mat4(&mut self, _: &str, _: &Mat4) {}
        fn set_vec2(&mut self, _: &str, _: Vec2) {}
        fn set_vec3(&mut self, _: &str, _: Vec3) {}
        fn set_vec4(&mut self, _: &str, _: Vec4) {}
        fn set_float(&mut self, _: &str, _: f32) {}
        fn set_int(&mut self, name: &str, value: i32) {
            self.ints.push((name.to_string(), value));
        }
    }

    #[test]
    fn test_bool_and_sampler_defaults_write_ints() {
        let mut sink = IntOnly::default();
        sink.set_bool(names::USE_TEXTURE, true);
        sink.set_bool(names::BLEND_TEXTURE, false);
        sink.set_sampler_2d(names::TEXTURE2, TextureSlot(7));

        assert_eq!(
            sink.ints,
            vec![
                ("bUseTexture".to_string(), 1),
                ("bBlendTexture".to_string(), 0),
                ("texture2".to_string(), 7),
            ]
        );
    }
}
