//! The tabletop scene as data
//!
//! Fourteen objects built from the basic shapes: a tablecloth and wall, a loaf
//! of bread, a glass butter dish, an orange and a bottle with its cap. Each
//! entry carries everything one render step needs.

use std::path::{Path, PathBuf};

use crate::foundation::math::{ModelTransform, Vec2, Vec3, Vec4};
use crate::render::material::{TextureParams, WrapMode};
use crate::render::primitives::ShapeKind;

/// How an object's surface is colored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Flat RGBA color, texturing disabled
    Color(Vec4),
    /// A single texture
    Texture(&'static str),
    /// Two textures blended, `mix` being the weight of `overlay`
    Textured {
        /// Tag of the primary texture
        base: &'static str,
        /// Tag of the blended texture
        overlay: &'static str,
        /// Blend factor in [0, 1]
        mix: f32,
    },
}

impl Surface {
    /// Texture tags this surface samples
    pub fn texture_tags(&self) -> Vec<&'static str> {
        match *self {
            Surface::Color(_) => Vec::new(),
            Surface::Texture(tag) => vec![tag],
            Surface::Textured { base, overlay, .. } => vec![base, overlay],
        }
    }
}

/// One entry of the scene table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    /// Name used in logs
    pub name: &'static str,
    /// Mesh to draw
    pub shape: ShapeKind,
    /// Model transform
    pub transform: ModelTransform,
    /// Texture coordinate scale
    pub uv_scale: Vec2,
    /// Color or textures
    pub surface: Surface,
    /// Material tag
    pub material: &'static str,
}

impl SceneObject {
    fn new(
        name: &'static str,
        shape: ShapeKind,
        transform: ModelTransform,
        surface: Surface,
        material: &'static str,
    ) -> Self {
        Self {
            name,
            shape,
            transform,
            uv_scale: Vec2::new(1.0, 1.0),
            surface,
            material,
        }
    }

    fn with_uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = Vec2::new(u, v);
        self
    }
}

/// An image file the scene loads, with its tag and wrap mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSource {
    /// File name inside the textures directory
    pub file: &'static str,
    /// Tag the texture is registered under
    pub tag: &'static str,
    /// Wrap mode for both axes
    pub wrap: WrapMode,
}

impl TextureSource {
    const fn repeat(file: &'static str, tag: &'static str) -> Self {
        Self {
            file,
            tag,
            wrap: WrapMode::Repeat,
        }
    }

    /// Sampler parameters for this texture
    pub const fn params(&self) -> TextureParams {
        TextureParams::with_wrap(self.wrap)
    }

    /// Full path of the image inside `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file)
    }
}

/// The ten textures of the scene, in load order
pub const TABLETOP_TEXTURES: [TextureSource; 10] = [
    TextureSource::repeat("tableCloth.jpg", "cloth"),
    TextureSource::repeat("bottleLid.jpg", "bottleLid"),
    TextureSource::repeat("bread.jpg", "breadTop"),
    TextureSource::repeat("butter.jpg", "butter"),
    TextureSource::repeat("cracks.jpg", "cracks"),
    TextureSource::repeat("ORANGE.jpg", "orange"),
    TextureSource::repeat("side.jpg", "breadSide"),
    TextureSource {
        file: "Untitled_Artwork.jpg",
        tag: "skull",
        wrap: WrapMode::MirroredRepeat,
    },
    TextureSource::repeat("wall.jpg", "wall"),
    TextureSource::repeat("water.jpg", "water"),
];

fn at(scale: [f32; 3], position: [f32; 3]) -> ModelTransform {
    ModelTransform::scaled_at(Vec3::from(scale), Vec3::from(position))
}

fn textured(base: &'static str, overlay: &'static str, mix: f32) -> Surface {
    Surface::Textured { base, overlay, mix }
}

fn color(r: f32, g: f32, b: f32, a: f32) -> Surface {
    Surface::Color(Vec4::new(r, g, b, a))
}

/// The fourteen scene objects, in draw order
pub fn tabletop_objects() -> Vec<SceneObject> {
    use ShapeKind::{Cylinder, Plane, Sphere, TaperedCylinder, Torus};

    let butter_dish_glass = color(1.0, 1.0, 0.8, 1.0);
    let bottle_plastic = color(0.8, 0.8, 0.8, 0.6);

    vec![
        SceneObject::new("tablecloth", Plane, at([20.0, 1.0, 10.0], [0.0, 0.0, 0.0]), textured("cloth", "skull", 0.3), "tableCloth")
            .with_uv_scale(4.0, 4.0),
        SceneObject::new(
            "wall",
            Plane,
            at([20.0, 1.0, 10.0], [0.0, 10.0, -10.0]).with_rotation(90.0, 0.0, 0.0),
            textured("wall", "skull", 0.5),
            "wall",
        )
        .with_uv_scale(3.0, 3.0),
        // Bread: box body with a half-buried cylinder as the rounded top
        SceneObject::new("bread loaf", ShapeKind::Box, at([5.0, 3.0, 3.0], [-4.0, 1.0, 4.0]), textured("breadSide", "breadSide", 0.0), "bread"),
        SceneObject::new(
            "bread crust",
            Cylinder,
            at([1.8, 4.8, 1.0], [-6.2, 3.0, 4.2]).with_rotation(90.0, 90.0, 0.0),
            textured("breadTop", "breadTop", 0.0),
            "bread",
        ),
        SceneObject::new("butter", Cylinder, at([1.5, 2.0, 1.5], [7.0, 0.0, 4.0]), textured("butter", "butter", 0.0), "glass")
            .with_uv_scale(2.0, 1.0),
        SceneObject::new("butter dish rim", Cylinder, at([1.5, 0.1, 1.5], [7.0, 2.0, 4.0]), butter_dish_glass, "glass"),
        SceneObject::new("butter dish lid", TaperedCylinder, at([1.0, 0.5, 1.0], [7.0, 2.0, 4.0]), butter_dish_glass, "glass"),
        SceneObject::new(
            "butter dish knob",
            TaperedCylinder,
            at([1.0, 0.5, 1.0], [7.0, 3.0, 4.0]).with_rotation(180.0, 0.0, 0.0),
            butter_dish_glass,
            "glass",
        ),
        SceneObject::new("orange", Sphere, at([1.5, 1.0, 1.5], [1.0, 1.0, 7.0]), textured("orange", "cracks", 0.2), "orange"),
        SceneObject::new("orange stem", Cylinder, at([0.1, 0.2, 0.1], [1.0, 2.0, 7.0]), color(0.5, 0.3, 0.2, 1.0), "bread"),
        SceneObject::new("bottle", Cylinder, at([1.5, 5.0, 1.5], [4.0, 0.5, 0.0]), bottle_plastic, "shinyPlastic"),
        SceneObject::new("bottle neck", TaperedCylinder, at([1.5, 0.5, 1.5], [4.0, 5.5, 0.0]), bottle_plastic, "shinyPlastic"),
        SceneObject::new("bottle cap", Cylinder, at([1.0, 0.5, 0.5], [4.0, 6.0, 0.1]), textured("bottleLid", "bottleLid", 0.0), "flatPlastic"),
        SceneObject::new("cap ring", Torus, at([1.0, 0.4, 0.8], [3.0, 6.0, 0.0]), color(1.0, 0.8, 0.0, 1.0), "flatPlastic"),
    ]
}
