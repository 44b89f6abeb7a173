//! Ambient Backdrop
//!
//! Drifting points behind the header and footer. The cursor nudges the
//! whole population toward it.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::AmbientField;

use crate::hooks::use_frame_loop;

/// Logical size of the backdrop's SVG viewport
const VIEW_WIDTH: f32 = 1200.0;
const VIEW_HEIGHT: f32 = 300.0;

/// Properties for the AmbientBackdrop component
#[derive(Clone, PartialEq, Props)]
pub struct AmbientBackdropProps {
    /// Number of drifting points
    #[props(default = AmbientField::DEFAULT_COUNT)]
    pub count: usize,
    /// Milliseconds per animation frame
    #[props(default = 16)]
    pub frame_ms: u64,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Content drawn above the backdrop
    pub children: Element,
}

/// Cursor position as a fraction of the element, or `None` for a
/// degenerate element
pub fn pointer_fraction(x: f64, y: f64, width: f64, height: f64) -> Option<(f32, f32)> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some((
        (x / width).clamp(0.0, 1.0) as f32,
        (y / height).clamp(0.0, 1.0) as f32,
    ))
}

#[component]
pub fn AmbientBackdrop(props: AmbientBackdropProps) -> Element {
    let count = props.count;
    let mut field = use_signal(move || AmbientField::scattered(count));
    let mut pointer = use_signal(|| None::<(f32, f32)>);
    let mut size = use_signal(|| (0.0_f64, 0.0_f64));

    use_frame_loop(Duration::from_millis(props.frame_ms.max(1)), move || {
        let pull = *pointer.peek();
        field.write().step(pull);
    });

    let dots = field.read().project(VIEW_WIDTH, VIEW_HEIGHT);
    let class = super::button::class_list("ambient", props.class.as_deref());

    rsx! {
        div {
            class: "{class}",
            onmounted: move |e| async move {
                if let Ok(rect) = e.get_client_rect().await {
                    size.set((rect.width(), rect.height()));
                }
            },
            onmousemove: move |e| {
                let at = e.element_coordinates();
                let (w, h) = size();
                pointer.set(pointer_fraction(at.x, at.y, w, h));
            },
            onmouseleave: move |_| pointer.set(None),
            svg {
                class: "ambient-field",
                "aria-hidden": "true",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                preserve_aspect_ratio: "none",
                for (i, dot) in dots.iter().enumerate() {
                    circle {
                        key: "{i}",
                        cx: "{dot.x:.1}",
                        cy: "{dot.y:.1}",
                        r: "{dot.radius:.2}",
                        opacity: "{dot.alpha:.2}",
                    }
                }
            }
            div { class: "ambient-content", {props.children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_fraction_clamps() {
        assert_eq!(pointer_fraction(50.0, 25.0, 100.0, 100.0), Some((0.5, 0.25)));
        assert_eq!(pointer_fraction(-5.0, 500.0, 100.0, 100.0), Some((0.0, 1.0)));
    }

    #[test]
    fn zero_size_has_no_pointer() {
        assert_eq!(pointer_fraction(1.0, 1.0, 0.0, 10.0), None);
    }
}
