//! Shader compilation and uniform upload
//!
//! The scene program is compiled from GLSL embedded in the binary. Uniform
//! locations are looked up once per name and cached; names the program does
//! not use resolve to `None` and writes to them are dropped by the driver.

use std::collections::HashMap;
use std::rc::Rc;

use glow::HasContext;
use thiserror::Error;

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use crate::render::uniforms::ShaderUniforms;

/// Vertex stage of the scene program
pub const SCENE_VERTEX_SHADER: &str = include_str!("../shaders/scene.vert");

/// Fragment stage of the scene program
pub const SCENE_FRAGMENT_SHADER: &str = include_str!("../shaders/scene.frag");

/// Shader build errors
#[derive(Error, Debug)]
pub enum ShaderError {
    /// GL object creation failed
    #[error("Shader object creation failed: {0}")]
    Creation(String),

    /// A stage failed to compile
    #[error("{stage} shader compilation failed:\n{log}")]
    Compilation {
        /// Stage name
        stage: &'static str,
        /// Driver info log
        log: String,
    },

    /// The program failed to link
    #[error("Shader program link failed:\n{0}")]
    Link(String),
}

/// Linked GL program with a uniform location cache
pub struct GlShaderProgram {
    gl: Rc<glow::Context>,
    program: glow::Program,
    locations: HashMap<String, Option<glow::UniformLocation>>,
}

impl GlShaderProgram {
    /// Compile and link the scene program
    pub fn scene(gl: Rc<glow::Context>) -> Result<Self, ShaderError> {
        Self::from_sources(gl, SCENE_VERTEX_SHADER, SCENE_FRAGMENT_SHADER)
    }

    /// Compile and link a program from vertex and fragment sources
    pub fn from_sources(gl: Rc<glow::Context>, vertex: &str, fragment: &str) -> Result<Self, ShaderError> {
        let program = unsafe {
            let vs = compile_stage(&gl, glow::VERTEX_SHADER, "Vertex", vertex)?;
            let fs = match compile_stage(&gl, glow::FRAGMENT_SHADER, "Fragment", fragment) {
                Ok(fs) => fs,
                Err(e) => {
                    gl.delete_shader(vs);
                    return Err(e);
                }
            };

            let program = gl.create_program().map_err(ShaderError::Creation)?;
            gl.attach_shader(program, vs);
            gl.attach_shader(program, fs);
            gl.link_program(program);

            gl.detach_shader(program, vs);
            gl.detach_shader(program, fs);
            gl.delete_shader(vs);
            gl.delete_shader(fs);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link(log));
            }
            program
        };

        log::info!("Shader program linked");
        Ok(Self {
            gl,
            program,
            locations: HashMap::new(),
        })
    }

    /// Make this the active program
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.program));
        }
    }

    fn location(&mut self, name: &str) -> Option<glow::UniformLocation> {
        if let Some(location) = self.locations.get(name) {
            return location.clone();
        }

        let location = unsafe { self.gl.get_uniform_location(self.program, name) };
        if location.is_none() {
            log::debug!("Uniform '{}' is not active in the scene program", name);
        }
        self.locations.insert(name.to_string(), location.clone());
        location
    }
}

unsafe fn compile_stage(
    gl: &glow::Context,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    let shader = gl.create_shader(kind).map_err(ShaderError::Creation)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(ShaderError::Compilation { stage, log });
    }
    Ok(shader)
}

impl ShaderUniforms for GlShaderProgram {
    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        let location = self.location(name);
        unsafe {
            self.gl.uniform_matrix_4_f32_slice(location.as_ref(), false, value.as_slice());
        }
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        let location = self.location(name);
        unsafe {
            self.gl.uniform_2_f32(location.as_ref(), value.x, value.y);
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        let location = self.location(name);
        unsafe {
            self.gl.uniform_3_f32(location.as_ref(), value.x, value.y, value.z);
        }
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        let location = self.location(name);
        unsafe {
            self.gl.uniform_4_f32(location.as_ref(), value.x, value.y, value.z, value.w);
        }
    }

    fn set_float(&mut self, name: &str, value: f32) {
        let location = self.location(name);
        unsafe {
            self.gl.uniform_1_f32(location.as_ref(), value);
        }
    }

    fn set_int(&mut self, name: &str, value: i32) {
        let location = self.location(name);
        unsafe {
            self.gl.uniform_1_i32(location.as_ref(), value);
        }
    }
}

impl Drop for GlShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
        }
    }
}
