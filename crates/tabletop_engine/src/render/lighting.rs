//! Lighting system
//!
//! Two point lights and one spot light, written into the `pointLights[]` and
//! `spotLight` uniform structs of the scene shader.

use crate::foundation::math::{utils, Vec3};
use crate::render::uniforms::{names, ShaderUniforms};

/// Number of point lights the scene shader declares
pub const POINT_LIGHT_COUNT: usize = 2;

/// Omnidirectional Phong light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Light position in world space
    pub position: Vec3,
    /// Ambient contribution
    pub ambient: Vec3,
    /// Diffuse contribution
    pub diffuse: Vec3,
    /// Specular contribution
    pub specular: Vec3,
    /// Whether the shader evaluates this light
    pub active: bool,
}

impl PointLight {
    /// Create an active point light
    pub fn new(position: Vec3, ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            position,
            ambient,
            diffuse,
            specular,
            active: true,
        }
    }

    /// Write this light into `pointLights[index]`
    pub fn apply<U: ShaderUniforms + ?Sized>(&self, index: usize, uniforms: &mut U) {
        uniforms.set_vec3(&names::point_light(index, "position"), self.position);
        uniforms.set_vec3(&names::point_light(index, "ambient"), self.ambient);
        uniforms.set_vec3(&names::point_light(index, "diffuse"), self.diffuse);
        uniforms.set_vec3(&names::point_light(index, "specular"), self.specular);
        uniforms.set_bool(&names::point_light(index, "bActive"), self.active);
    }
}

/// Attenuated cone light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    /// Light position in world space
    pub position: Vec3,
    /// Cone axis
    pub direction: Vec3,
    /// Ambient contribution
    pub ambient: Vec3,
    /// Diffuse contribution
    pub diffuse: Vec3,
    /// Specular contribution
    pub specular: Vec3,
    /// Constant attenuation term
    pub constant: f32,
    /// Linear attenuation term
    pub linear: f32,
    /// Quadratic attenuation term
    pub quadratic: f32,
    /// Cosine of the full-intensity cone angle
    pub cut_off: f32,
    /// Cosine of the outer cone angle where intensity reaches zero
    pub outer_cut_off: f32,
    /// Whether the shader evaluates this light
    pub active: bool,
}

impl SpotLight {
    /// Write this light into `spotLight`
    pub fn apply<U: ShaderUniforms + ?Sized>(&self, uniforms: &mut U) {
        uniforms.set_vec3(&names::spot_light("position"), self.position);
        uniforms.set_vec3(&names::spot_light("direction"), self.direction);
        uniforms.set_vec3(&names::spot_light("ambient"), self.ambient);
        uniforms.set_vec3(&names::spot_light("diffuse"), self.diffuse);
        uniforms.set_vec3(&names::spot_light("specular"), self.specular);
        uniforms.set_float(&names::spot_light("constant"), self.constant);
        uniforms.set_float(&names::spot_light("linear"), self.linear);
        uniforms.set_float(&names::spot_light("quadratic"), self.quadratic);
        uniforms.set_float(&names::spot_light("cutOff"), self.cut_off);
        uniforms.set_float(&names::spot_light("outerCutOff"), self.outer_cut_off);
        uniforms.set_bool(&names::spot_light("bActive"), self.active);
    }
}

/// Every light source of the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLights {
    /// Point lights, indexed as in the shader array
    pub point_lights: [PointLight; POINT_LIGHT_COUNT],
    /// Overhead spot light
    pub spot_light: SpotLight,
}

impl SceneLights {
    /// Warm key light, cool fill light and an overhead spot
    pub fn tabletop() -> Self {
        Self {
            point_lights: [
                PointLight::new(
                    Vec3::new(-7.0, 2.0, 6.0),
                    Vec3::new(0.6, 0.5, 0.4),
                    Vec3::new(0.8, 0.4, 0.1),
                    Vec3::new(0.9, 0.5, 0.2),
                ),
                PointLight::new(
                    Vec3::new(8.0, 2.0, -6.0),
                    Vec3::new(0.05, 0.05, 0.2),
                    Vec3::new(0.2, 0.4, 1.0),
                    Vec3::new(0.3, 0.6, 1.0),
                ),
            ],
            spot_light: SpotLight {
                position: Vec3::new(-2.0, 10.0, 0.0),
                direction: Vec3::new(0.0, -1.0, 0.0),
                ambient: Vec3::new(1.0, 0.9, 0.8),
                diffuse: Vec3::new(1.5, 1.3, 1.2),
                specular: Vec3::new(1.5, 1.3, 1.2),
                constant: 1.0,
                linear: 0.1,
                quadratic: 0.03,
                cut_off: utils::deg_to_rad(45.0).cos(),
                outer_cut_off: utils::deg_to_rad(60.0).cos(),
                active: true,
            },
        }
    }

    /// Enable lighting and write every light into the shader
    pub fn apply<U: ShaderUniforms + ?Sized>(&self, uniforms: &mut U) {
        uniforms.set_bool(names::USE_LIGHTING, true);

        for (index, light) in self.point_lights.iter().enumerate() {
            light.apply(index, uniforms);
        }
        self.spot_light.apply(uniforms);

        log::debug!(
            "Scene lights applied: {} point, 1 spot",
            self.point_lights.iter().filter(|light| light.active).count()
        );
    }
}

impl Default for SceneLights {
    fn default() -> Self {
        Self::tabletop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingUniforms;
    use approx::assert_relative_eq;

    #[test]
    fn test_apply_enables_lighting() {
        let mut uniforms = RecordingUniforms::new();
        SceneLights::tabletop().apply(&mut uniforms);
        assert_eq!(uniforms.bool("bUseLighting"), Some(true));
    }

    #[test]
    fn test_point_lights_written_by_index() {
        let mut uniforms = RecordingUniforms::new();
        SceneLights::tabletop().apply(&mut uniforms);

        assert_eq!(uniforms.vec3("pointLights[0].position"), Some(Vec3::new(-7.0, 2.0, 6.0)));
        assert_eq!(uniforms.vec3("pointLights[0].diffuse"), Some(Vec3::new(0.8, 0.4, 0.1)));
        assert_eq!(uniforms.vec3("pointLights[1].position"), Some(Vec3::new(8.0, 2.0, -6.0)));
        assert_eq!(uniforms.vec3("pointLights[1].ambient"), Some(Vec3::new(0.05, 0.05, 0.2)));
        assert_eq!(uniforms.bool("pointLights[0].bActive"), Some(true));
        assert_eq!(uniforms.bool("pointLights[1].bActive"), Some(true));
    }

    #[test]
    fn test_spot_light_cone_is_cosine_of_angles() {
        let mut uniforms = RecordingUniforms::new();
        SceneLights::tabletop().apply(&mut uniforms);

        let cut_off = uniforms.float("spotLight.cutOff").unwrap();
        let outer = uniforms.float("spotLight.outerCutOff").unwrap();
        assert_relative_eq!(cut_off, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
        assert_relative_eq!(outer, 0.5, epsilon = 1e-6);
        // Inner cone is narrower, so its cosine is larger.
        assert!(cut_off > outer);

        assert_eq!(uniforms.vec3("spotLight.direction"), Some(Vec3::new(0.0, -1.0, 0.0)));
        assert_eq!(uniforms.float("spotLight.quadratic"), Some(0.03));
        assert_eq!(uniforms.bool("spotLight.bActive"), Some(true));
    }

    #[test]
    fn test_inactive_light_still_written() {
        let mut lights = SceneLights::tabletop();
        lights.point_lights[1].active = false;
        let mut uniforms = RecordingUniforms::new();

        lights.apply(&mut uniforms);

        assert_eq!(uniforms.bool("pointLights[1].bActive"), Some(false));
        assert!(uniforms.vec3("pointLights[1].position").is_some());
    }
}
