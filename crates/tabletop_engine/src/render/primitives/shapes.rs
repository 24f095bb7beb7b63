//! Procedural shape generators
//!
//! Every generator returns an indexed [`Mesh`] with counter-clockwise front
//! faces, unit normals and texture coordinates in [0, 1]. Shapes are built at
//! unit size; the scene scales them with the model matrix.

use std::f32::consts::{PI, TAU};

use super::{Mesh, ShapeKind, Vertex};

/// Radial subdivisions of cylinders and spheres
pub const RADIAL_SEGMENTS: u32 = 36;

/// Latitude bands of the sphere
pub const SPHERE_RINGS: u32 = 18;

/// Subdivisions around the torus ring
pub const TORUS_MAIN_SEGMENTS: u32 = 48;

/// Subdivisions around the torus tube
pub const TORUS_TUBE_SEGMENTS: u32 = 16;

/// Distance from the torus center to the middle of its tube
pub const TORUS_MAJOR_RADIUS: f32 = 1.0;

/// Radius of the torus tube
pub const TORUS_TUBE_RADIUS: f32 = 0.2;

/// Top radius of the tapered cylinder
pub const TAPERED_TOP_RADIUS: f32 = 0.5;

/// Build the mesh for a shape kind
pub fn generate(shape: ShapeKind) -> Mesh {
    match shape {
        ShapeKind::Plane => plane(),
        ShapeKind::Box => cube(),
        ShapeKind::Cylinder => frustum(1.0, 1.0, RADIAL_SEGMENTS),
        ShapeKind::Sphere => sphere(RADIAL_SEGMENTS, SPHERE_RINGS),
        ShapeKind::Torus => torus(
            TORUS_MAJOR_RADIUS,
            TORUS_TUBE_RADIUS,
            TORUS_MAIN_SEGMENTS,
            TORUS_TUBE_SEGMENTS,
        ),
        ShapeKind::TaperedCylinder => frustum(1.0, TAPERED_TOP_RADIUS, RADIAL_SEGMENTS),
    }
}

/// 2x2 square in the XZ plane at y = 0, facing +Y
pub fn plane() -> Mesh {
    let normal = [0.0, 1.0, 0.0];
    let vertices = vec![
        Vertex::new([-1.0, 0.0, 1.0], normal, [0.0, 0.0]),
        Vertex::new([1.0, 0.0, 1.0], normal, [1.0, 0.0]),
        Vertex::new([1.0, 0.0, -1.0], normal, [1.0, 1.0]),
        Vertex::new([-1.0, 0.0, -1.0], normal, [0.0, 1.0]),
    ];

    Mesh::new(vertices, vec![0, 1, 2, 0, 2, 3])
}

/// Unit cube centered at the origin with one quad per face
pub fn cube() -> Mesh {
    // (normal, u axis, v axis) with u x v = normal
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let corners = [(-1.0, -1.0, [0.0, 0.0]), (1.0, -1.0, [1.0, 0.0]), (1.0, 1.0, [1.0, 1.0]), (-1.0, 1.0, [0.0, 1.0])];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in faces {
        let base = vertices.len() as u32;
        for (su, sv, uv) in corners {
            let position = [
                0.5 * (normal[0] + su * u[0] + sv * v[0]),
                0.5 * (normal[1] + su * u[1] + sv * v[1]),
                0.5 * (normal[2] + su * u[2] + sv * v[2]),
            ];
            vertices.push(Vertex::new(position, normal, uv));
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(vertices, indices)
}

/// Capped cone frustum standing on y = 0 with height 1
///
/// Equal radii give a cylinder.
pub fn frustum(bottom_radius: f32, top_radius: f32, segments: u32) -> Mesh {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    // Side: slant normal leans up as the radius shrinks
    let slope = bottom_radius - top_radius;
    for seg in 0..=segments {
        let u = seg as f32 / segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        let normal = normalize([cos, slope, sin]);
        vertices.push(Vertex::new([bottom_radius * cos, 0.0, bottom_radius * sin], normal, [u, 0.0]));
        vertices.push(Vertex::new([top_radius * cos, 1.0, top_radius * sin], normal, [u, 1.0]));
    }
    for seg in 0..segments {
        let bottom = 2 * seg;
        let top = bottom + 1;
        let next_bottom = bottom + 2;
        let next_top = bottom + 3;
        indices.extend_from_slice(&[bottom, top, next_bottom, next_bottom, top, next_top]);
    }

    push_cap(&mut vertices, &mut indices, bottom_radius, 0.0, -1.0, segments);
    push_cap(&mut vertices, &mut indices, top_radius, 1.0, 1.0, segments);

    Mesh::new(vertices, indices)
}

/// Disc at height `y` facing `facing` (+1 up, -1 down)
fn push_cap(vertices: &mut Vec<Vertex>, indices: &mut Vec<u32>, radius: f32, y: f32, facing: f32, segments: u32) {
    let normal = [0.0, facing, 0.0];
    let center = vertices.len() as u32;
    vertices.push(Vertex::new([0.0, y, 0.0], normal, [0.5, 0.5]));

    for seg in 0..=segments {
        let (sin, cos) = (seg as f32 / segments as f32 * TAU).sin_cos();
        vertices.push(Vertex::new(
            [radius * cos, y, radius * sin],
            normal,
            [0.5 + 0.5 * cos, 0.5 + 0.5 * sin],
        ));
    }

    for seg in 0..segments {
        let current = center + 1 + seg;
        let next = current + 1;
        if facing > 0.0 {
            indices.extend_from_slice(&[center, next, current]);
        } else {
            indices.extend_from_slice(&[center, current, next]);
        }
    }
}

/// UV sphere of radius 1 centered at the origin
pub fn sphere(segments: u32, rings: u32) -> Mesh {
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);

    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = TAU * seg as f32 / segments as f32;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();
            let uv = [seg as f32 / segments as f32, 1.0 - ring as f32 / rings as f32];

            vertices.push(Vertex::new([x, y, z], [x, y, z], uv));
        }
    }

    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * (segments + 1) + seg;
            let next = current + segments + 1;

            indices.extend_from_slice(&[current, current + 1, next]);
            indices.extend_from_slice(&[current + 1, next + 1, next]);
        }
    }

    Mesh::new(vertices, indices)
}

/// Torus around the Z axis, lying in the XY plane
pub fn torus(major_radius: f32, tube_radius: f32, main_segments: u32, tube_segments: u32) -> Mesh {
    let mut vertices = Vec::with_capacity(((main_segments + 1) * (tube_segments + 1)) as usize);
    let mut indices = Vec::with_capacity((main_segments * tube_segments * 6) as usize);

    for i in 0..=main_segments {
        let u = i as f32 / main_segments as f32;
        let (sin_theta, cos_theta) = (u * TAU).sin_cos();

        for j in 0..=tube_segments {
            let v = j as f32 / tube_segments as f32;
            let (sin_phi, cos_phi) = (v * TAU).sin_cos();

            let normal = [cos_phi * cos_theta, cos_phi * sin_theta, sin_phi];
            let position = [
                major_radius * cos_theta + tube_radius * normal[0],
                major_radius * sin_theta + tube_radius * normal[1],
                tube_radius * normal[2],
            ];
            vertices.push(Vertex::new(position, normal, [u, v]));
        }
    }

    let stride = tube_segments + 1;
    for i in 0..main_segments {
        for j in 0..tube_segments {
            let current = i * stride + j;
            let next_main = current + stride;
            let next_tube = current + 1;
            let next_both = next_main + 1;

            indices.extend_from_slice(&[current, next_main, next_tube]);
            indices.extend_from_slice(&[next_tube, next_main, next_both]);
        }
    }

    Mesh::new(vertices, indices)
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    [v[0] / length, v[1] / length, v[2] / length]
}
