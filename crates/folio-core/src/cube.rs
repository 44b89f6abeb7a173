//! Rotating wireframe cube for the home hero
//!
//! Rotation and perspective projection of a 2x2x2 cube. Hovering hides the
//! cube; the page emits a particle burst at the same moment.

use std::f64::consts::PI;

use crate::types::Point;

/// Radians added to each rotation axis per frame
pub const ROTATION_STEP: f64 = 0.01;

/// Distance from the camera to the cube centre
const CAMERA_DISTANCE: f64 = 5.0;

/// Vertical field of view, degrees
const FIELD_OF_VIEW: f64 = 50.0;

const VERTICES: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// A projected edge in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Rotation state of the hero cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireCube {
    angle_x: f64,
    angle_y: f64,
    visible: bool,
}

impl Default for WireCube {
    fn default() -> Self {
        Self::new()
    }
}

impl WireCube {
    pub fn new() -> Self {
        Self {
            angle_x: 0.0,
            angle_y: 0.0,
            visible: true,
        }
    }

    pub fn angles(&self) -> (f64, f64) {
        (self.angle_x, self.angle_y)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// One animation frame; a hidden cube holds still
    pub fn advance(&mut self) {
        if !self.visible {
            return;
        }
        self.angle_x = wrap(self.angle_x + ROTATION_STEP);
        self.angle_y = wrap(self.angle_y + ROTATION_STEP);
    }

    /// Breathing scale at `elapsed_ms` since start
    pub fn scale_at(elapsed_ms: f64) -> f64 {
        1.0 + 0.1 * (elapsed_ms * 0.001).sin()
    }

    /// Vertices after scaling and rotation (y first, then x)
    pub fn vertices(&self, scale: f64) -> [[f64; 3]; 8] {
        let (sin_x, cos_x) = self.angle_x.sin_cos();
        let (sin_y, cos_y) = self.angle_y.sin_cos();
        let rotation_y = [[cos_y, 0.0, sin_y], [0.0, 1.0, 0.0], [-sin_y, 0.0, cos_y]];
        let rotation_x = [[1.0, 0.0, 0.0], [0.0, cos_x, -sin_x], [0.0, sin_x, cos_x]];

        let mut out = [[0.0; 3]; 8];
        for (slot, v) in out.iter_mut().zip(VERTICES.iter()) {
            let scaled = [v[0] * scale, v[1] * scale, v[2] * scale];
            let turned = multiply_matrix_vector(&rotation_y, &scaled);
            *slot = multiply_matrix_vector(&rotation_x, &turned);
        }
        out
    }

    /// The 12 edges projected into a `width` x `height` viewport
    pub fn edges(&self, scale: f64, width: f64, height: f64) -> Vec<Segment> {
        let verts = self.vertices(scale);
        EDGES
            .iter()
            .map(|&(a, b)| {
                let (x1, y1) = project([verts[a][0], verts[a][1], verts[a][2]], width, height);
                let (x2, y2) = project([verts[b][0], verts[b][1], verts[b][2]], width, height);
                Segment { x1, y1, x2, y2 }
            })
            .collect()
    }
}

/// Perspective-project a world point seen from the camera on +z
pub fn project(p: [f64; 3], width: f64, height: f64) -> (f64, f64) {
    let focal = (height / 2.0) / (FIELD_OF_VIEW.to_radians() / 2.0).tan();
    let depth = (CAMERA_DISTANCE - p[2]).max(0.1);
    (
        width / 2.0 + p[0] * focal / depth,
        height / 2.0 - p[1] * focal / depth,
    )
}

/// Project a particle position (effect space) the same way
pub fn project_point(p: Point, width: f64, height: f64) -> (f64, f64) {
    project([p.x as f64, p.y as f64, p.z as f64], width, height)
}

fn wrap(angle: f64) -> f64 {
    if angle > 2.0 * PI {
        angle - 2.0 * PI
    } else {
        angle
    }
}

fn multiply_matrix_vector(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_rotates_both_axes() {
        let mut cube = WireCube::new();
        cube.advance();
        cube.advance();
        let (x, y) = cube.angles();
        assert!((x - 0.02).abs() < 1e-12);
        assert!((y - 0.02).abs() < 1e-12);
    }

    #[test]
    fn hidden_cube_does_not_rotate() {
        let mut cube = WireCube::new();
        cube.hide();
        cube.advance();
        assert_eq!(cube.angles(), (0.0, 0.0));
        cube.show();
        assert!(cube.is_visible());
    }

    #[test]
    fn angles_wrap() {
        let mut cube = WireCube::new();
        for _ in 0..700 {
            cube.advance();
        }
        let (x, _) = cube.angles();
        assert!(x <= 2.0 * PI);
    }

    #[test]
    fn scale_breathes_around_one() {
        assert!((WireCube::scale_at(0.0) - 1.0).abs() < 1e-12);
        for ms in [250.0, 1570.8, 4712.4, 10_000.0] {
            let s = WireCube::scale_at(ms);
            assert!((0.9..=1.1).contains(&s));
        }
    }

    #[test]
    fn rotation_preserves_edge_length() {
        let mut cube = WireCube::new();
        for _ in 0..37 {
            cube.advance();
        }
        let v = cube.vertices(1.0);
        for &(a, b) in EDGES.iter() {
            let d: f64 = (0..3).map(|i| (v[a][i] - v[b][i]).powi(2)).sum::<f64>().sqrt();
            assert!((d - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn front_face_is_square_in_viewport() {
        let cube = WireCube::new();
        let edges = cube.edges(1.0, 400.0, 400.0);
        assert_eq!(edges.len(), 12);
        let centre = project([0.0, 0.0, 0.0], 400.0, 400.0);
        assert_eq!(centre, (200.0, 200.0));
    }
}
