//! Wireframe Cube
//!
//! SVG rendering of the rotating hero cube. Hovering hides the cube and
//! scatters a handful of particles from its centre.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::cube::project_point;
use folio_core::{ParticleEffect, Point, WireCube};

use crate::hooks::{use_frame_loop, use_particle_emitter};

pub const HIDDEN_NOTICE: &str = "Cube hidden! Move cursor away to reveal.";

/// Properties for the WireCubeView component
#[derive(Clone, PartialEq, Props)]
pub struct WireCubeViewProps {
    /// Viewport width in px
    #[props(default = 320.0)]
    pub width: f64,
    /// Viewport height in px
    #[props(default = 320.0)]
    pub height: f64,
    /// Milliseconds per animation frame
    #[props(default = 16)]
    pub frame_ms: u64,
    #[props(default = ParticleEffect::CUBE)]
    pub effect: ParticleEffect,
}

#[component]
pub fn WireCubeView(props: WireCubeViewProps) -> Element {
    let mut cube = use_signal(WireCube::new);
    let mut elapsed_ms = use_signal(|| 0.0_f64);
    let emitter = use_particle_emitter(props.effect);

    let frame_ms = props.frame_ms.max(1);
    use_frame_loop(Duration::from_millis(frame_ms), move || {
        cube.write().advance();
        *elapsed_ms.write() += frame_ms as f64;
    });

    let (width, height) = (props.width, props.height);
    let visible = cube.read().is_visible();
    let edges = cube.read().edges(WireCube::scale_at(elapsed_ms()), width, height);
    let sparks: Vec<(f64, f64, f32)> = emitter
        .field()
        .read()
        .iter()
        .map(|p| {
            let (x, y) = project_point(p.position(), width, height);
            (x, y, p.opacity)
        })
        .collect();

    let on_enter = {
        let emitter = emitter.clone();
        move |_: MouseEvent| {
            cube.write().hide();
            emitter.emit(Point::ORIGIN);
        }
    };

    rsx! {
        div {
            class: "wire-cube",
            onmouseenter: on_enter,
            onmouseleave: move |_| cube.write().show(),
            svg {
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",
                if visible {
                    for (i, seg) in edges.iter().enumerate() {
                        line {
                            key: "{i}",
                            class: "cube-edge",
                            x1: "{seg.x1:.2}",
                            y1: "{seg.y1:.2}",
                            x2: "{seg.x2:.2}",
                            y2: "{seg.y2:.2}",
                        }
                    }
                }
                for (i, (x, y, opacity)) in sparks.iter().enumerate() {
                    circle {
                        key: "{i}",
                        class: "cube-spark",
                        cx: "{x:.2}",
                        cy: "{y:.2}",
                        r: "3",
                        opacity: "{opacity:.2}",
                    }
                }
            }
            if !visible {
                p { class: "cube-notice", "{HIDDEN_NOTICE}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cube_fits_viewport() {
        let edges = WireCube::new().edges(WireCube::scale_at(0.0), 320.0, 320.0);
        assert_eq!(edges.len(), 12);
        let inside = |v: f64| (0.0..=320.0).contains(&v);
        for s in &edges {
            assert!(inside(s.x1) && inside(s.x2), "{:?}", s);
            assert!(inside(s.y1) && inside(s.y2), "{:?}", s);
        }
    }
}
