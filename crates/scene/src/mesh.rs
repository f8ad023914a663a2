//! The two static primitive meshes: a unit cube and a triangular prism.
//!
//! Both meshes are centered on the origin and span [-0.5, 0.5] on every
//! axis. Vertices are duplicated per face so that each face carries its own
//! flat normal. Color is not part of the mesh; it is supplied per draw.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Selects one of the primitive meshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Axis-aligned unit cube.
    Cube,
    /// Triangular prism (a wedge) with the ridge along z at the top.
    Prism,
}

impl MeshKind {
    /// Both mesh kinds.
    pub const ALL: [MeshKind; 2] = [MeshKind::Cube, MeshKind::Prism];

    /// Static geometry for this mesh.
    pub fn data(self) -> &'static MeshData {
        match self {
            MeshKind::Cube => &CUBE,
            MeshKind::Prism => &PRISM,
        }
    }
}

/// Immutable vertex and index data for a primitive.
#[derive(Debug)]
pub struct MeshData {
    /// Vertex positions, duplicated per face.
    pub positions: &'static [[f32; 3]],
    /// One normal per vertex, constant across each face.
    pub normals: &'static [[f32; 3]],
    /// Triangle list indices into `positions`.
    pub indices: &'static [u16],
}

impl MeshData {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices (three per triangle).
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Interleaved vertices ready for upload.
    pub fn vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(self.normals)
            .map(|(p, n)| MeshVertex::new(Vec3::from_array(*p), Vec3::from_array(*n)))
            .collect()
    }
}

/// Interleaved position/normal vertex.
///
/// # Memory Layout
///
/// - Offset 0: position (12 bytes)
/// - Offset 12: normal (12 bytes)
/// - Total size: 24 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: Vec3,
    /// Face normal.
    pub normal: Vec3,
}

impl MeshVertex {
    /// Creates a new vertex.
    #[inline]
    pub const fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}

//    v6----- v5
//   /|      /|
//  v1------v0|
//  | |     | |
//  | |v7---|-|v4
//  |/      |/
//  v2------v3
#[rustfmt::skip]
static CUBE: MeshData = MeshData {
    positions: &[
        // front (v0 v1 v2 v3)
        [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, -0.5, 0.5], [0.5, -0.5, 0.5],
        // right (v0 v3 v4 v5)
        [0.5, 0.5, 0.5], [0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5],
        // up (v0 v5 v6 v1)
        [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5], [-0.5, 0.5, 0.5],
        // left (v1 v6 v7 v2)
        [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5],
        // down (v7 v4 v3 v2)
        [-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5],
        // back (v4 v7 v6 v5)
        [0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5],
    ],
    normals: &[
        [0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0],
        [-1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [-1.0, 0.0, 0.0],
        [0.0, -1.0, 0.0], [0.0, -1.0, 0.0], [0.0, -1.0, 0.0], [0.0, -1.0, 0.0],
        [0.0, 0.0, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0, -1.0],
    ],
    indices: &[
        0, 1, 2, 0, 2, 3, // front
        4, 5, 6, 4, 6, 7, // right
        8, 9, 10, 8, 10, 11, // up
        12, 13, 14, 12, 14, 15, // left
        16, 17, 18, 16, 18, 19, // down
        20, 21, 22, 20, 22, 23, // back
    ],
};

// Triangular cross-section in the xy plane, extruded along z. The sloped
// sides keep the axis-aligned normals of the faces they replace.
#[rustfmt::skip]
static PRISM: MeshData = MeshData {
    positions: &[
        // front
        [-0.5, -0.5, 0.5], [0.0, 0.5, 0.5], [0.5, -0.5, 0.5],
        // right slope
        [0.0, 0.5, 0.5], [0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.0, 0.5, -0.5],
        // left slope
        [-0.5, -0.5, 0.5], [0.0, 0.5, 0.5], [0.0, 0.5, -0.5], [-0.5, -0.5, -0.5],
        // bottom
        [-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [-0.5, -0.5, -0.5],
        // back
        [-0.5, -0.5, -0.5], [0.0, 0.5, -0.5], [0.5, -0.5, -0.5],
    ],
    normals: &[
        [0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [-1.0, 0.0, 0.0],
        [0.0, -1.0, 0.0], [0.0, -1.0, 0.0], [0.0, -1.0, 0.0], [0.0, -1.0, 0.0],
        [0.0, 0.0, -1.0], [0.0, 0.0, -1.0], [0.0, 0.0, -1.0],
    ],
    indices: &[
        0, 1, 2, // front
        3, 4, 5, 3, 5, 6, // right
        7, 8, 9, 7, 9, 10, // left
        11, 12, 13, 11, 13, 14, // bottom
        15, 16, 17, // back
    ],
};
