//! Particle emitters

use dioxus::prelude::*;
use folio_core::scheduler::{self, Flow};
use folio_core::{ParticleEffect, ParticleField, Point};
use tokio_util::sync::CancellationToken;

use super::use_task_scope;

/// Handle to a component's particle layer
#[derive(Clone)]
pub struct ParticleEmitter {
    field: Signal<ParticleField>,
    effect: ParticleEffect,
    token: CancellationToken,
}

impl ParticleEmitter {
    /// The live particles, for rendering
    pub fn field(&self) -> Signal<ParticleField> {
        self.field
    }

    /// Emit one burst at `origin`.
    ///
    /// Under timeout decay each new particle gets its own removal timer.
    pub fn emit(&self, origin: Point) {
        let mut field = self.field;
        let ids = field.write().burst(origin, &self.effect);

        if let Some(lifetime) = self.effect.decay.lifetime() {
            for id in ids {
                let token = self.token.clone();
                spawn(async move {
                    scheduler::after(lifetime, token, move || {
                        field.write().remove(id);
                    })
                    .await;
                });
            }
        }
    }
}

/// A particle layer using `effect`.
///
/// Tick-decay effects get one decay loop for the layer's lifetime.
pub fn use_particle_emitter(effect: ParticleEffect) -> ParticleEmitter {
    let token = use_task_scope();
    let mut field = use_signal(|| ParticleField::new(effect.decay));

    use_hook({
        let token = token.clone();
        move || {
            if let Some(period) = effect.decay.tick_interval() {
                spawn(async move {
                    scheduler::every(period, token, move || {
                        if !field.peek().is_empty() {
                            field.write().decay();
                        }
                        Flow::Continue
                    })
                    .await;
                });
            }
        }
    });

    ParticleEmitter {
        field,
        effect,
        token,
    }
}
