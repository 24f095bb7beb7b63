//! GPU meshes for the basic shapes

use std::collections::HashMap;
use std::rc::Rc;

use glow::HasContext;

use crate::render::primitives::{shapes, Mesh, MeshError, MeshLibrary, ShapeKind, Vertex};

/// Vertex array with its buffers
struct GlMesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
    index_count: i32,
}

/// Run `create`, calling `release` to free earlier objects if it fails
fn create_or_release<T>(create: impl FnOnce() -> Result<T, String>, release: impl FnOnce()) -> Result<T, MeshError> {
    create().map_err(|e| {
        release();
        MeshError::Upload(e)
    })
}

/// One uploaded mesh per shape kind
pub struct GlShapeMeshes {
    gl: Rc<glow::Context>,
    meshes: HashMap<ShapeKind, GlMesh>,
}

impl GlShapeMeshes {
    /// Create an empty library on the current context
    pub fn new(gl: Rc<glow::Context>) -> Self {
        Self {
            gl,
            meshes: HashMap::new(),
        }
    }

    /// Whether `shape` has been uploaded
    pub fn is_loaded(&self, shape: ShapeKind) -> bool {
        self.meshes.contains_key(&shape)
    }

    fn upload(&self, mesh: &Mesh) -> Result<GlMesh, MeshError> {
        let gl = &self.gl;
        unsafe {
            let vao = gl.create_vertex_array().map_err(MeshError::Upload)?;
            let vbo = create_or_release(|| gl.create_buffer(), || gl.delete_vertex_array(vao))?;
            let ebo = create_or_release(
                || gl.create_buffer(),
                || {
                    gl.delete_buffer(vbo);
                    gl.delete_vertex_array(vao);
                },
            )?;

            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, mesh.vertex_bytes(), glow::STATIC_DRAW);

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(glow::ELEMENT_ARRAY_BUFFER, mesh.index_bytes(), glow::STATIC_DRAW);

            let stride = Vertex::STRIDE as i32;
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(1, 3, glow::FLOAT, false, stride, Vertex::NORMAL_OFFSET as i32);
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(2, 2, glow::FLOAT, false, stride, Vertex::TEX_COORD_OFFSET as i32);

            // The element buffer binding is VAO state; unbind the VAO first
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Ok(GlMesh {
                vao,
                vbo,
                ebo,
                index_count: mesh.indices.len() as i32,
            })
        }
    }
}

impl MeshLibrary for GlShapeMeshes {
    fn load_mesh(&mut self, shape: ShapeKind) -> Result<(), MeshError> {
        if self.is_loaded(shape) {
            return Ok(());
        }

        let mesh = shapes::generate(shape);
        let gl_mesh = self.upload(&mesh)?;
        log::debug!(
            "Uploaded {} mesh: {} vertices, {} triangles",
            shape.name(),
            mesh.vertices.len(),
            mesh.triangle_count()
        );
        self.meshes.insert(shape, gl_mesh);
        Ok(())
    }

    fn draw_mesh(&mut self, shape: ShapeKind) -> Result<(), MeshError> {
        let mesh = self.meshes.get(&shape).ok_or(MeshError::NotLoaded(shape))?;
        unsafe {
            self.gl.bind_vertex_array(Some(mesh.vao));
            self.gl.draw_elements(glow::TRIANGLES, mesh.index_count, glow::UNSIGNED_INT, 0);
            self.gl.bind_vertex_array(None);
        }
        Ok(())
    }
}

impl Drop for GlShapeMeshes {
    fn drop(&mut self) {
        for (_, mesh) in self.meshes.drain() {
            unsafe {
                self.gl.delete_vertex_array(mesh.vao);
                self.gl.delete_buffer(mesh.vbo);
                self.gl.delete_buffer(mesh.ebo);
            }
        }
    }
}
