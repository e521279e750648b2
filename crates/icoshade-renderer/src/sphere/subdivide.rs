//! Recursive subdivision of a unit-sphere polyhedron.
//!
//! Each pass splits every triangle into four and pushes the new edge
//! midpoints back onto the unit sphere. Shared edges are resolved through a
//! per-pass [`MidpointCache`] so neighbouring triangles reference one vertex.

use std::collections::HashMap;

use super::icosahedron::Polyhedron;

/// Highest subdivision level [`tessellate`] will run.
///
/// Level 8 is 1.3M triangles; beyond that index and vertex buffers grow
/// past what a single draw comfortably handles.
pub const MAX_SUBDIVISIONS: u32 = 8;

/// Triangle count after `level` passes over an icosahedron.
pub const fn triangle_count(level: u32) -> usize {
    20 * 4usize.pow(level)
}

/// Vertex count after `level` passes over an icosahedron.
pub const fn vertex_count(level: u32) -> usize {
    10 * 4usize.pow(level) + 2
}

/// Edge midpoint lookup, scoped to one subdivision pass.
///
/// Keys are unordered: `(a, b)` and `(b, a)` resolve to the same midpoint.
#[derive(Debug, Default)]
pub struct MidpointCache {
    midpoints: HashMap<(u32, u32), u32>,
}

impl MidpointCache {
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            midpoints: HashMap::with_capacity(edges),
        }
    }

    /// Index of the midpoint of edge `(a, b)`, appending a new normalized
    /// vertex to `positions` on first use.
    pub fn midpoint(&mut self, a: u32, b: u32, positions: &mut Vec<[f32; 3]>) -> u32 {
        let key = (a.min(b), a.max(b));
        *self.midpoints.entry(key).or_insert_with(|| {
            let pa = positions[a as usize];
            let pb = positions[b as usize];
            let mid = normalize([
                (pa[0] + pb[0]) * 0.5,
                (pa[1] + pb[1]) * 0.5,
                (pa[2] + pb[2]) * 0.5,
            ]);
            positions.push(mid);
            (positions.len() - 1) as u32
        })
    }

    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }
}

/// Subdivide `base` `level` times.
///
/// Level 0 returns a copy of `base`. Levels above [`MAX_SUBDIVISIONS`] are
/// clamped with a warning. Winding order of `base` is preserved.
pub fn tessellate(base: &Polyhedron, level: u32) -> Polyhedron {
    let level = if level > MAX_SUBDIVISIONS {
        tracing::warn!(
            requested = level,
            max = MAX_SUBDIVISIONS,
            "subdivision level clamped"
        );
        MAX_SUBDIVISIONS
    } else {
        level
    };

    let mut mesh = base.clone();
    for _ in 0..level {
        mesh = subdivide_once(&mesh);
    }
    mesh
}

/// One 1-to-4 split of every triangle in `mesh`.
pub fn subdivide_once(mesh: &Polyhedron) -> Polyhedron {
    let tri_in = mesh.triangles.len();
    // Closed 2-manifold: E = 3F / 2, one new vertex per edge.
    let new_edges = tri_in * 3 / 2;

    let mut positions = Vec::with_capacity(mesh.positions.len() + new_edges);
    positions.extend_from_slice(&mesh.positions);
    let mut triangles = Vec::with_capacity(tri_in * 4);
    let mut cache = MidpointCache::with_capacity(new_edges);

    for &[a, b, c] in &mesh.triangles {
        let ab = cache.midpoint(a, b, &mut positions);
        let bc = cache.midpoint(b, c, &mut positions);
        let ca = cache.midpoint(c, a, &mut positions);

        triangles.push([a, ab, ca]);
        triangles.push([b, bc, ab]);
        triangles.push([c, ca, bc]);
        triangles.push([ab, bc, ca]);
    }

    Polyhedron {
        positions,
        triangles,
    }
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        v
    }
}

// =============================================================================
// Tests
// =============================================================================
