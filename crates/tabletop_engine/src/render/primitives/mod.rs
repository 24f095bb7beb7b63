//! Core primitive types for rendering
//!
//! Vertex and mesh data, the procedural shape generators, the fixed scene
//! camera, and the [`MeshLibrary`] seam the scene draws through.

pub mod mesh;
pub mod shapes;
pub mod camera;

pub use mesh::{Mesh, Vertex};
pub use camera::Camera;

use thiserror::Error;

/// Basic shapes the scene is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// 2x2 square in the XZ plane facing +Y
    Plane,
    /// Unit cube centered at the origin
    Box,
    /// Capped cylinder of radius 1 from y = 0 to y = 1
    Cylinder,
    /// Sphere of radius 1
    Sphere,
    /// Ring in the XY plane
    Torus,
    /// Capped cylinder narrowing from radius 1 to 0.5
    TaperedCylinder,
}

impl ShapeKind {
    /// Every shape, in load order
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Plane,
        ShapeKind::Box,
        ShapeKind::Cylinder,
        ShapeKind::Sphere,
        ShapeKind::Torus,
        ShapeKind::TaperedCylinder,
    ];

    /// Human-readable name for logs
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Plane => "plane",
            ShapeKind::Box => "box",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Torus => "torus",
            ShapeKind::TaperedCylinder => "tapered cylinder",
        }
    }
}

/// Mesh upload and draw errors
#[derive(Debug, Error)]
pub enum MeshError {
    /// Drawing a shape that was never loaded
    #[error("Mesh '{}' has not been loaded", .0.name())]
    NotLoaded(ShapeKind),

    /// GPU buffer creation failed
    #[error("Mesh upload failed: {0}")]
    Upload(String),
}

/// Owns the GPU geometry of every basic shape
pub trait MeshLibrary {
    /// Generate and upload `shape`; loading an already loaded shape does nothing
    fn load_mesh(&mut self, shape: ShapeKind) -> Result<(), MeshError>;

    /// Issue the draw call for a loaded shape using the current shader state
    fn draw_mesh(&mut self, shape: ShapeKind) -> Result<(), MeshError>;

    /// Load every shape kind
    fn load_all(&mut self) -> Result<(), MeshError> {
        for shape in ShapeKind::ALL {
            self.load_mesh(shape)?;
        }
        Ok(())
    }
}
