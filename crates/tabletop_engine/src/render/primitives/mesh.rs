//! Mesh representation for 3D models
//!
//! Backend-agnostic vertex and index data. The OpenGL layer uploads these
//! as-is, so `Vertex` is `#[repr(C)]` and `Pod`.

use bytemuck::{Pod, Zeroable};

/// 3D vertex data structure for rendering
///
/// Attribute locations in the scene shader: 0 = position, 1 = normal,
/// 2 = texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in 3D space
    pub position: [f32; 3],

    /// Normal vector
    pub normal: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }

    /// Byte distance between consecutive vertices
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Byte offset of the normal attribute
    pub const NORMAL_OFFSET: usize = 3 * std::mem::size_of::<f32>();

    /// Byte offset of the texture coordinate attribute
    pub const TEX_COORD_OFFSET: usize = 6 * std::mem::size_of::<f32>();
}

/// Indexed triangle mesh
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex data
    pub vertices: Vec<Vertex>,

    /// Index data for triangles
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex data as raw bytes for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes for buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 32);
        assert_eq!(Vertex::NORMAL_OFFSET, 12);
        assert_eq!(Vertex::TEX_COORD_OFFSET, 24);
    }

    #[test]
    fn test_byte_views() {
        let mesh = Mesh::new(
            vec![Vertex::new([0.0; 3], [0.0, 1.0, 0.0], [0.0; 2]); 3],
            vec![0, 1, 2],
        );
        assert_eq!(mesh.vertex_bytes().len(), 3 * 32);
        assert_eq!(mesh.index_bytes().len(), 12);
        assert_eq!(mesh.triangle_count(), 1);
    }
}
