//! Ambient drifting points for header and footer backgrounds
//!
//! A fixed population wanders inside a box, reflecting off its faces and
//! leaning toward the pointer. Nothing spawns or dies here; see
//! [`crate::particles`] for bursts.

use rand::Rng;

use crate::types::Point;

/// Per-axis pull applied for a pointer at the viewport edge
const POINTER_DRIFT: f32 = 0.02;

/// Largest initial speed per axis, per frame
const MAX_SPEED: f32 = 0.01;

/// A wandering point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drifter {
    pub position: Point,
    pub velocity: Point,
}

/// A point projected into a 2D viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenDot {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

/// The drifting population and its bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientField {
    /// Half extents of the box, centred on the origin
    half: Point,
    drifters: Vec<Drifter>,
}

impl AmbientField {
    pub const DEFAULT_COUNT: usize = 50;
    pub const DEFAULT_HALF_EXTENTS: Point = Point {
        x: 10.0,
        y: 2.5,
        z: 5.0,
    };

    /// Scatter `count` drifters uniformly through the box
    pub fn new<R: Rng>(count: usize, half: Point, rng: &mut R) -> Self {
        let half = Point::spatial(half.x.abs(), half.y.abs(), half.z.abs());
        let mut axis = |extent: f32| {
            if extent > 0.0 {
                rng.random_range(-extent..=extent)
            } else {
                0.0
            }
        };

        let drifters = (0..count)
            .map(|_| {
                let position = Point::spatial(axis(half.x), axis(half.y), axis(half.z));
                let velocity = Point::spatial(axis(MAX_SPEED), axis(MAX_SPEED), axis(MAX_SPEED));
                Drifter { position, velocity }
            })
            .collect();

        Self { half, drifters }
    }

    /// `count` drifters in the default box, seeded from the thread RNG
    pub fn scattered(count: usize) -> Self {
        Self::new(count, Self::DEFAULT_HALF_EXTENTS, &mut rand::rng())
    }

    pub fn half_extents(&self) -> Point {
        self.half
    }

    pub fn drifters(&self) -> &[Drifter] {
        &self.drifters
    }

    pub fn len(&self) -> usize {
        self.drifters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drifters.is_empty()
    }

    /// Advance one frame.
    ///
    /// `pointer` is the cursor position as a fraction of the viewport
    /// (0..1 on each axis); the centre exerts no pull.
    pub fn step(&mut self, pointer: Option<(f32, f32)>) {
        let (pull_x, pull_y) = pointer
            .map(|(px, py)| ((px - 0.5) * POINTER_DRIFT, (py - 0.5) * POINTER_DRIFT))
            .unwrap_or((0.0, 0.0));
        let half = self.half;

        for d in &mut self.drifters {
            d.position.x += d.velocity.x + pull_x;
            d.position.y += d.velocity.y + pull_y;
            d.position.z += d.velocity.z;

            reflect(&mut d.position.x, &mut d.velocity.x, half.x);
            reflect(&mut d.position.y, &mut d.velocity.y, half.y);
            reflect(&mut d.position.z, &mut d.velocity.z, half.z);
        }
    }

    /// Map every drifter into a `width` x `height` viewport.
    ///
    /// Nearer points (higher z) come out larger and more opaque.
    pub fn project(&self, width: f32, height: f32) -> Vec<ScreenDot> {
        let half = self.half;
        let norm = |v: f32, extent: f32| if extent > 0.0 { v / extent } else { 0.0 };

        self.drifters
            .iter()
            .map(|d| {
                let nx = norm(d.position.x, half.x);
                let ny = norm(d.position.y, half.y);
                let depth = ((norm(d.position.z, half.z) + 1.0) / 2.0).clamp(0.0, 1.0);
                ScreenDot {
                    x: (nx + 1.0) / 2.0 * width,
                    y: (1.0 - ny) / 2.0 * height,
                    radius: 1.0 + 2.0 * depth,
                    alpha: 0.3 + 0.6 * depth,
                }
            })
            .collect()
    }
}

/// Pin a coordinate that crossed a face back onto it and point its
/// velocity inward.
fn reflect(position: &mut f32, velocity: &mut f32, extent: f32) {
    if *position > extent {
        *position = extent;
        *velocity = -velocity.abs();
    } else if *position < -extent {
        *position = -extent;
        *velocity = velocity.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field() -> AmbientField {
        AmbientField::new(50, AmbientField::DEFAULT_HALF_EXTENTS, &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn starts_inside_box() {
        let f = field();
        assert_eq!(f.len(), 50);
        for d in f.drifters() {
            assert!(d.position.x.abs() <= 10.0);
            assert!(d.position.y.abs() <= 2.5);
            assert!(d.position.z.abs() <= 5.0);
            assert!(d.velocity.x.abs() <= MAX_SPEED);
        }
    }

    #[test]
    fn step_moves_by_velocity() {
        let mut f = field();
        let before = f.drifters()[0];
        f.step(None);
        let after = f.drifters()[0];
        assert!((after.position.x - (before.position.x + before.velocity.x)).abs() < 1e-6);
    }

    #[test]
    fn reflects_at_boundary() {
        let mut f = AmbientField {
            half: Point::spatial(1.0, 1.0, 1.0),
            drifters: vec![Drifter {
                position: Point::spatial(0.995, 0.0, 0.0),
                velocity: Point::spatial(0.01, 0.0, 0.0),
            }],
        };
        f.step(None);
        assert!(f.drifters()[0].velocity.x < 0.0);
        assert_eq!(f.drifters()[0].position.x, 1.0);
    }

    #[test]
    fn stays_inside_box_over_many_frames() {
        let mut f = field();
        for _ in 0..10_000 {
            f.step(None);
        }
        for d in f.drifters() {
            assert!(d.position.x.abs() <= 10.0);
            assert!(d.position.y.abs() <= 2.5);
            assert!(d.position.z.abs() <= 5.0);
        }
    }

    #[test]
    fn corner_pointer_cannot_push_drifters_out() {
        let mut f = field();
        for _ in 0..2_000 {
            f.step(Some((1.0, 1.0)));
        }
        for d in f.drifters() {
            assert!(d.position.x.abs() <= 10.0);
            assert!(d.position.y.abs() <= 2.5);
        }
        assert!(f.project(800.0, 200.0).iter().all(|dot| (0.0..=800.0).contains(&dot.x)));
    }

    #[test]
    fn pointer_at_centre_has_no_pull() {
        let mut a = field();
        let mut b = a.clone();
        a.step(None);
        b.step(Some((0.5, 0.5)));
        assert_eq!(a, b);
    }

    #[test]
    fn projection_fits_viewport() {
        let f = field();
        for dot in f.project(800.0, 200.0) {
            assert!((0.0..=800.0).contains(&dot.x));
            assert!((0.0..=200.0).contains(&dot.y));
            assert!((0.3..=0.9 + 1e-6).contains(&dot.alpha));
        }
    }
}
