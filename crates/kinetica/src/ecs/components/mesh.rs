//! # Mesh: Editable Triangle Geometry
//!
//! A [`Mesh`] is the geometry of one modeled object: a vertex list and a
//! triangle list indexing into it. Both element types are `#[repr(C)]` and
//! [`Pod`](bytemuck::Pod), so the renderer can upload them with
//! [`Mesh::vertex_bytes`]/[`Mesh::index_bytes`] without any conversion.
//!
//! ## Dirty Flag
//!
//! Editing operations touch the CPU copy. The `dirty` flag tells the renderer
//! the GPU copy is stale. New meshes start dirty since nothing was uploaded yet.
//!
//! ## Primitives
//!
//! All triangles use counter-clockwise winding seen from the front face, to
//! match wgpu's default `FrontFace::Ccw`. Cube faces get their own 4 vertices
//! (24 total) so every face has a flat normal, which is what low-poly shading
//! wants anyway.

use bytemuck::{Pod, Zeroable};

/// One mesh vertex: position, normal, texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Three vertex indices forming one triangle.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Triangle {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Triangle {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }
}

/// Triangle geometry attached to an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<Triangle>,
    pub dirty: bool,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<Triangle>) -> Self {
        Self {
            vertices,
            indices,
            dirty: true,
        }
    }

    /// Unit cube centered at the origin (side length 1.0).
    pub fn cube() -> Self {
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(12);

        // (normal, u direction, v direction) per face
        let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        let corners = [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];
        let uvs = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];
        let h = 0.5_f32;

        for (normal, u_dir, v_dir) in &faces {
            let base = vertices.len() as u32;
            for (corner, uv) in corners.iter().zip(uvs) {
                let position = std::array::from_fn(|axis| {
                    normal[axis] * h + u_dir[axis] * corner[0] * h + v_dir[axis] * corner[1] * h
                });
                vertices.push(Vertex {
                    position,
                    normal: *normal,
                    uv,
                });
            }
            indices.push(Triangle::new(base, base + 1, base + 2));
            indices.push(Triangle::new(base, base + 2, base + 3));
        }

        Self::new(vertices, indices)
    }

    /// Unit plane on XZ, normal +Y, centered at the origin.
    pub fn plane() -> Self {
        let h = 0.5_f32;
        let up = [0.0, 1.0, 0.0];
        let vertices = vec![
            Vertex {
                position: [-h, 0.0, h],
                normal: up,
                uv: [0.0, 0.0],
            },
            Vertex {
                position: [h, 0.0, h],
                normal: up,
                uv: [1.0, 0.0],
            },
            Vertex {
                position: [h, 0.0, -h],
                normal: up,
                uv: [1.0, 1.0],
            },
            Vertex {
                position: [-h, 0.0, -h],
                normal: up,
                uv: [0.0, 1.0],
            },
        ];
        let indices = vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
        Self::new(vertices, indices)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Vertex data as raw bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes (three `u32` per triangle).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Mark the GPU copy as up to date.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark the GPU copy as stale.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
