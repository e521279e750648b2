//! The level-0 polyhedron every sphere starts from.

/// Golden ratio.
const PHI: f32 = 1.618_034;

/// Indexed triangle mesh with every vertex on the unit sphere.
///
/// Vertex positions double as unit normals.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    pub positions: Vec<[f32; 3]>,
    /// Counter-clockwise when viewed from outside.
    pub triangles: Vec<[u32; 3]>,
}

impl Polyhedron {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// Regular icosahedron: 12 unit-length vertices, 20 faces.
pub fn icosahedron() -> Polyhedron {
    let norm = (1.0 + PHI * PHI).sqrt();
    let a = 1.0 / norm;
    let b = PHI / norm;

    let positions = vec![
        [-a, b, 0.0],
        [a, b, 0.0],
        [-a, -b, 0.0],
        [a, -b, 0.0],
        [0.0, -a, b],
        [0.0, a, b],
        [0.0, -a, -b],
        [0.0, a, -b],
        [b, 0.0, -a],
        [b, 0.0, a],
        [-b, 0.0, -a],
        [-b, 0.0, a],
    ];

    let triangles = vec![
        // around vertex 0
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        // adjacent band
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        // around vertex 3
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        // adjacent band
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    Polyhedron {
        positions,
        triangles,
    }
}
