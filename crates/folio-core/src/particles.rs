//! Particle bursts
//!
//! Short-lived markers spawned by a click or hover. A [`ParticleField`] owns
//! the active set for one emitter (or a group of emitters sharing a layer)
//! and applies one of two decay policies:
//!
//! - [`DecayPolicy::Timeout`]: each particle is removed after a fixed
//!   lifetime; the owner schedules `remove(id)` for every id `spawn` returns.
//! - [`DecayPolicy::Tick`]: the owner calls `decay()` on a fixed period; each
//!   call lowers every opacity by `step` and drops particles at or below zero.
//!
//! The field itself has no timers, so it can be tested without a clock.

use std::fmt;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::types::Point;

/// Unique identifier for a particle
///
/// Uses ULID: 48 bits of timestamp plus 80 random bits, so two live
/// particles sharing an id is not a practical concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub Ulid);

impl ParticleId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ParticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "particle_{}", self.0)
    }
}

/// How particles leave the active set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecayPolicy {
    /// Removed `lifetime_ms` after spawning, whatever the opacity
    Timeout { lifetime_ms: u64 },
    /// Opacity lowered by `step` every `interval_ms`; removed at or below zero
    Tick { interval_ms: u64, step: f32 },
}

impl DecayPolicy {
    pub const fn timeout(lifetime_ms: u64) -> Self {
        DecayPolicy::Timeout { lifetime_ms }
    }

    pub const fn tick(interval_ms: u64, step: f32) -> Self {
        DecayPolicy::Tick { interval_ms, step }
    }

    /// Per-particle lifetime for timeout decay
    pub fn lifetime(&self) -> Option<Duration> {
        match self {
            DecayPolicy::Timeout { lifetime_ms } => Some(Duration::from_millis(*lifetime_ms)),
            DecayPolicy::Tick { .. } => None,
        }
    }

    /// Decay period for tick decay
    pub fn tick_interval(&self) -> Option<Duration> {
        match self {
            DecayPolicy::Timeout { .. } => None,
            DecayPolicy::Tick { interval_ms, .. } => Some(Duration::from_millis(*interval_ms)),
        }
    }
}

/// Range particles are scattered over, centred on the burst origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "radius", rename_all = "snake_case")]
pub enum Spread {
    /// x and y drawn from `[-radius, radius]`, z stays zero
    Planar(f32),
    /// x, y and z drawn from `[-radius, radius]`
    Spatial(f32),
}

impl Spread {
    pub fn radius(&self) -> f32 {
        match self {
            Spread::Planar(r) | Spread::Spatial(r) => r.abs(),
        }
    }

    /// Draw one offset uniformly from the spread.
    ///
    /// A radius whose range width is not finite scatters nothing.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        let r = self.radius();
        let usable = r > 0.0 && (r * 2.0).is_finite();
        let mut draw = || if usable { rng.random_range(-r..=r) } else { 0.0 };
        match self {
            Spread::Planar(_) => Point::new(draw(), draw()),
            Spread::Spatial(_) => {
                let (x, y, z) = (draw(), draw(), draw());
                Point::spatial(x, y, z)
            }
        }
    }
}

/// A named burst shape: how many particles, how far, how they fade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleEffect {
    pub count: usize,
    pub spread: Spread,
    pub decay: DecayPolicy,
}

impl ParticleEffect {
    /// Largest particle count a single burst may ask for
    pub const MAX_COUNT: usize = 1000;

    /// Largest spread radius, in effect units
    pub const MAX_RADIUS: f32 = 1.0e4;

    /// Describe the first value that would stop particles from being
    /// scattered or from ever leaving the field.
    pub fn check(&self) -> Result<(), String> {
        if self.count > Self::MAX_COUNT {
            return Err(format!("count {} over {}", self.count, Self::MAX_COUNT));
        }

        let radius = self.spread.radius();
        if !radius.is_finite() || radius > Self::MAX_RADIUS {
            return Err(format!("spread radius {} over {}", radius, Self::MAX_RADIUS));
        }

        match self.decay {
            DecayPolicy::Timeout { lifetime_ms: 0 } => Err("zero lifetime".to_string()),
            DecayPolicy::Tick { interval_ms: 0, .. } => Err("zero tick interval".to_string()),
            DecayPolicy::Tick { step, .. } if !(step.is_finite() && step > 0.0) => {
                Err(format!("tick step {} is not positive", step))
            }
            _ => Ok(()),
        }
    }

    /// Click on a call-to-action button
    pub const BUTTON: ParticleEffect = ParticleEffect {
        count: 1,
        spread: Spread::Planar(10.0),
        decay: DecayPolicy::timeout(1000),
    };

    /// Click on a footer social icon
    pub const SOCIAL: ParticleEffect = ParticleEffect {
        count: 1,
        spread: Spread::Planar(10.0),
        decay: DecayPolicy::timeout(1000),
    };

    /// Hover over the about-page avatar
    pub const AVATAR: ParticleEffect = ParticleEffect {
        count: 5,
        spread: Spread::Planar(50.0),
        decay: DecayPolicy::tick(50, 0.02),
    };

    /// Hover over the home-page cube
    pub const CUBE: ParticleEffect = ParticleEffect {
        count: 10,
        spread: Spread::Spatial(2.0),
        decay: DecayPolicy::tick(50, 0.02),
    };
}

/// A single live particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    /// Where the burst was emitted
    pub origin: Point,
    /// Displacement from `origin`
    pub offset: Point,
    /// 1.0 at spawn; always > 0 while in a field
    pub opacity: f32,
}

impl Particle {
    pub fn position(&self) -> Point {
        Point::spatial(
            self.origin.x + self.offset.x,
            self.origin.y + self.offset.y,
            self.origin.z + self.offset.z,
        )
    }
}

/// The active particle set of one effect layer
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    decay: DecayPolicy,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(decay: DecayPolicy) -> Self {
        Self {
            decay,
            particles: Vec::new(),
        }
    }

    pub fn policy(&self) -> DecayPolicy {
        self.decay
    }

    /// Add `count` particles around `origin` at full opacity.
    ///
    /// Returns the new ids in spawn order. A colliding id replaces the
    /// particle that held it.
    pub fn spawn<R: Rng>(
        &mut self,
        origin: Point,
        count: usize,
        spread: Spread,
        rng: &mut R,
    ) -> Vec<ParticleId> {
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let id = ParticleId::new();
            self.particles.retain(|p| p.id != id);
            self.particles.push(Particle {
                id,
                origin,
                offset: spread.sample(rng),
                opacity: 1.0,
            });
            ids.push(id);
        }
        tracing::trace!(count, active = self.particles.len(), "Spawned particles");
        ids
    }

    /// Emit one burst of `effect` with the thread-local RNG
    pub fn burst(&mut self, origin: Point, effect: &ParticleEffect) -> Vec<ParticleId> {
        self.spawn(origin, effect.count, effect.spread, &mut rand::rng())
    }

    /// Remove a particle; `false` if it was already gone
    pub fn remove(&mut self, id: ParticleId) -> bool {
        let before = self.particles.len();
        self.particles.retain(|p| p.id != id);
        self.particles.len() != before
    }

    /// Apply one decay tick under this field's policy.
    ///
    /// Returns how many particles were removed. Timeout fields are unaffected.
    pub fn decay(&mut self) -> usize {
        match self.decay {
            DecayPolicy::Tick { step, .. } => self.fade(step),
            DecayPolicy::Timeout { .. } => 0,
        }
    }

    /// Lower every opacity by `step` and drop particles at or below zero.
    ///
    /// A step that is not a positive number clears the field.
    pub fn fade(&mut self, step: f32) -> usize {
        let step = if step.is_finite() && step > 0.0 { step } else { 1.0 };
        let before = self.particles.len();
        for p in &mut self.particles {
            p.opacity = (p.opacity - step).min(1.0);
        }
        self.particles.retain(|p| p.opacity > 0.0);
        before - self.particles.len()
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
