//! Flat, upload-ready sphere mesh.
//!
//! [`MeshBuffer`] is what leaves the subdivision engine: one interleaved
//! vertex array and one index array, immutable once built. A new level of
//! detail produces a new buffer that replaces the old one wholesale.

use super::icosahedron::{icosahedron, Polyhedron};
use super::subdivide::tessellate;
use super::types::SphereVertex;

/// Immutable vertex and index arrays for one tessellation.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffer {
    vertices: Vec<SphereVertex>,
    indices: Vec<u32>,
}

impl MeshBuffer {
    /// Scale a unit-sphere polyhedron to `radius`.
    ///
    /// Normals are the unit positions; positions are `normal * radius`.
    pub fn from_polyhedron(poly: &Polyhedron, radius: f32) -> Self {
        let vertices = poly
            .positions
            .iter()
            .map(|&n| SphereVertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
            })
            .collect();
        let indices = poly.triangles.iter().flatten().copied().collect();
        Self { vertices, indices }
    }

    pub fn vertices(&self) -> &[SphereVertex] {
        &self.vertices
    }

    /// Vertex data as a flat `[px, py, pz, nx, ny, nz, ...]` slice.
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Icosahedron-based sphere description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icosphere {
    pub radius: f32,
    /// Subdivision passes, clamped by [`tessellate`].
    pub level: u32,
}

impl Icosphere {
    pub fn new(radius: f32, level: u32) -> Self {
        Self { radius, level }
    }

    /// Run the subdivision engine and assemble the mesh buffer.
    pub fn build(&self) -> MeshBuffer {
        let poly = tessellate(&icosahedron(), self.level);
        let mesh = MeshBuffer::from_polyhedron(&poly, self.radius);
        tracing::debug!(
            level = self.level,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "icosphere built"
        );
        mesh
    }
}

// =============================================================================
// Tests
// =============================================================================
