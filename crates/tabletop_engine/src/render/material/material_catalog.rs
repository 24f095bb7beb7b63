//! Named Phong materials
//!
//! The catalog is an ordered list searched by tag. The tabletop scene defines
//! its seven materials once during preparation and only reads them afterwards.

use crate::foundation::math::Vec3;
use crate::render::uniforms::{names, ShaderUniforms};

/// Diffuse/specular material looked up by tag
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Lookup tag, matched exactly
    pub tag: String,
    /// Diffuse reflectance, each channel in [0, 1]
    pub diffuse_color: Vec3,
    /// Specular reflectance, each channel in [0, 1]
    pub specular_color: Vec3,
    /// Specular exponent
    pub shininess: f32,
}

impl Material {
    /// Create a material
    pub fn new(tag: impl Into<String>, diffuse_color: Vec3, specular_color: Vec3, shininess: f32) -> Self {
        Self {
            tag: tag.into(),
            diffuse_color,
            specular_color,
            shininess,
        }
    }

    /// Write this material into the `material.*` uniforms
    pub fn apply<U: ShaderUniforms + ?Sized>(&self, uniforms: &mut U) {
        uniforms.set_vec3(names::MATERIAL_DIFFUSE, self.diffuse_color);
        uniforms.set_vec3(names::MATERIAL_SPECULAR, self.specular_color);
        uniforms.set_float(names::MATERIAL_SHININESS, self.shininess);
    }
}

/// Ordered material list with first-match lookup
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material
    ///
    /// Tags are not deduplicated; a repeated tag is shadowed by the earlier one.
    pub fn push(&mut self, material: Material) {
        if self.find(&material.tag).is_some() {
            log::warn!("Material tag '{}' defined twice; lookups resolve to the first one", material.tag);
        }
        self.materials.push(material);
    }

    /// Append the seven tabletop materials
    pub fn define_object_materials(&mut self) {
        // Dark base with a strong highlight for glossy plastic.
        self.push(Material::new(
            "shinyPlastic",
            Vec3::new(0.1, 0.1, 0.1),
            Vec3::new(0.9, 0.9, 0.9),
            100.0,
        ));
        self.push(Material::new(
            "flatPlastic",
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.2, 0.2, 0.2),
            5.0,
        ));
        self.push(Material::new(
            "glass",
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.95, 0.95, 0.95),
            120.0,
        ));
        self.push(Material::new(
            "bread",
            Vec3::new(0.9, 0.7, 0.4),
            Vec3::new(0.1, 0.1, 0.1),
            2.0,
        ));
        // Vinyl tablecloth: polished but not glossy.
        self.push(Material::new(
            "tableCloth",
            Vec3::new(0.2, 0.3, 0.4),
            Vec3::new(0.7, 0.7, 0.7),
            50.0,
        ));
        self.push(Material::new(
            "wall",
            Vec3::new(0.8, 0.7, 0.6),
            Vec3::new(0.1, 0.1, 0.1),
            3.0,
        ));
        self.push(Material::new(
            "orange",
            Vec3::new(0.9, 0.5, 0.1),
            Vec3::new(0.3, 0.3, 0.3),
            10.0,
        ));
    }

    /// First material registered under `tag`
    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    /// All materials in definition order
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Iterator over material tags in definition order
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.materials.iter().map(|material| material.tag.as_str())
    }

    /// Number of materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
