//! Unit cube face table.
//!
//! Each face is two non-indexed triangles over corners of the unit cube
//! `{0,1}³`, plus one fixed outward normal. The table order is the
//! emission order of every mesher in this crate.

use voxwall_shared::{Color, Vec3, VERTICES_PER_FACE};

use crate::vertex::Vertex;

/// Cube face label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// +X
    North,
    /// -Z
    West,
    /// -X
    South,
    /// +Z
    East,
    /// +Y
    Up,
    /// -Y
    Down,
}

/// Geometry of one cube face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    /// Which face this is.
    pub face: Face,
    /// Corner offsets of the two triangles, in emission order.
    pub corners: [Vec3; VERTICES_PER_FACE],
    /// Outward unit normal.
    pub normal: Vec3,
}

const fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// The six faces in emission order: North, West, South, East, Up, Down.
pub const FACE_TABLE: [FaceGeometry; 6] = [
    FaceGeometry {
        face: Face::North,
        corners: [
            v(1.0, 1.0, 1.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 1.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 1.0, 1.0),
            v(1.0, 0.0, 1.0),
        ],
        normal: v(1.0, 0.0, 0.0),
    },
    FaceGeometry {
        face: Face::West,
        corners: [
            v(1.0, 1.0, 0.0),
            v(0.0, 0.0, 0.0),
            v(0.0, 1.0, 0.0),
            v(1.0, 1.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(0.0, 0.0, 0.0),
        ],
        normal: v(0.0, 0.0, -1.0),
    },
    FaceGeometry {
        face: Face::South,
        corners: [
            v(0.0, 0.0, 0.0),
            v(0.0, 0.0, 1.0),
            v(0.0, 1.0, 1.0),
            v(0.0, 0.0, 0.0),
            v(0.0, 1.0, 1.0),
            v(0.0, 1.0, 0.0),
        ],
        normal: v(-1.0, 0.0, 0.0),
    },
    FaceGeometry {
        face: Face::East,
        corners: [
            v(0.0, 1.0, 1.0),
            v(0.0, 0.0, 1.0),
            v(1.0, 0.0, 1.0),
            v(1.0, 1.0, 1.0),
            v(0.0, 1.0, 1.0),
            v(1.0, 0.0, 1.0),
        ],
        normal: v(0.0, 0.0, 1.0),
    },
    FaceGeometry {
        face: Face::Up,
        corners: [
            v(1.0, 1.0, 1.0),
            v(1.0, 1.0, 0.0),
            v(0.0, 1.0, 0.0),
            v(1.0, 1.0, 1.0),
            v(0.0, 1.0, 0.0),
            v(0.0, 1.0, 1.0),
        ],
        normal: v(0.0, 1.0, 0.0),
    },
    FaceGeometry {
        face: Face::Down,
        corners: [
            v(1.0, 0.0, 1.0),
            v(0.0, 0.0, 0.0),
            v(1.0, 0.0, 0.0),
            v(1.0, 0.0, 1.0),
            v(0.0, 0.0, 1.0),
            v(0.0, 0.0, 0.0),
        ],
        normal: v(0.0, -1.0, 0.0),
    },
];

/// Appends all six faces of a unit cube at `translation` to `out`.
#[inline]
pub fn push_cube(out: &mut Vec<Vertex>, translation: Vec3, color: Color) {
    for geometry in &FACE_TABLE {
        out.extend(
            geometry
                .corners
                .iter()
                .map(|&corner| Vertex::new(corner + translation, color, geometry.normal)),
        );
    }
}
