//! Particle Layer Component
//!
//! Draws a [`ParticleField`] as absolutely positioned dots centred on the
//! parent (`.particle-anchor`). Timeout-decay particles animate out with a
//! CSS keyframe; tick-decay particles take their opacity from the field.

use dioxus::prelude::*;
use folio_core::{DecayPolicy, Particle, ParticleField};

/// Inline style for one particle
pub fn particle_style(particle: &Particle, policy: DecayPolicy) -> String {
    let pos = particle.position();
    match policy {
        DecayPolicy::Timeout { lifetime_ms } => format!(
            "--dx: {:.1}px; --dy: {:.1}px; animation-duration: {}ms;",
            pos.x,
            pos.y,
            lifetime_ms.saturating_sub(200)
        ),
        DecayPolicy::Tick { .. } => format!(
            "transform: translate({:.1}px, {:.1}px); opacity: {:.2};",
            pos.x, pos.y, particle.opacity
        ),
    }
}

#[component]
pub fn ParticleLayer(field: Signal<ParticleField>) -> Element {
    let field = field.read();
    let policy = field.policy();
    let class = match policy {
        DecayPolicy::Timeout { .. } => "particle particle-burst",
        DecayPolicy::Tick { .. } => "particle particle-fade",
    };

    rsx! {
        div { class: "particle-layer", "aria-hidden": "true",
            for particle in field.iter() {
                div {
                    key: "{particle.id}",
                    class: "{class}",
                    style: particle_style(particle, policy),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ParticleId, Point};

    fn particle(x: f32, y: f32, opacity: f32) -> Particle {
        Particle {
            id: ParticleId::new(),
            origin: Point::ORIGIN,
            offset: Point::new(x, y),
            opacity,
        }
    }

    #[test]
    fn timeout_style_sets_offsets() {
        let style = particle_style(&particle(4.0, -2.5, 1.0), DecayPolicy::timeout(1000));
        assert_eq!(style, "--dx: 4.0px; --dy: -2.5px; animation-duration: 800ms;");
    }

    #[test]
    fn tick_style_carries_opacity() {
        let style = particle_style(&particle(10.0, 0.0, 0.5), DecayPolicy::tick(50, 0.02));
        assert_eq!(style, "transform: translate(10.0px, 0.0px); opacity: 0.50;");
    }
}
