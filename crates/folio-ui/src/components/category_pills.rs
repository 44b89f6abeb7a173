//! Category Pills Component
//!
//! Project filter as a radio group. Each pill carries how many projects it
//! would show; arrow keys move the selection and skip empty categories.

use dioxus::prelude::*;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Filter choices with their project counts, "All" first
    pub categories: Vec<(String, usize)>,
    /// Currently selected category
    pub selected: String,
    /// Handler called when a category is selected
    pub on_select: EventHandler<String>,
}

/// Filter pills for the project grid
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| "All".to_string());
///
/// rsx! {
///     CategoryPills {
///         categories: folio_core::category_counts(&projects),
///         selected: selected(),
///         on_select: move |cat| selected.set(cat)
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let on_select = props.on_select;
    let categories = props.categories.clone();
    let selected = props.selected.clone();

    let onkeydown = move |evt: KeyboardEvent| {
        let step = match evt.key() {
            Key::ArrowRight | Key::ArrowDown => 1,
            Key::ArrowLeft | Key::ArrowUp => -1,
            _ => return,
        };
        evt.prevent_default();
        if let Some(next) = neighbour(&categories, &selected, step) {
            on_select.call(next);
        }
    };

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Filter projects by category",
            onkeydown: onkeydown,
            for (cat, count) in props.categories.iter() {
                {
                    let cat_clone = cat.clone();
                    let is_selected = props.selected == *cat;
                    let empty = *count == 0 && !is_selected;
                    rsx! {
                        button {
                            key: "{cat}",
                            class: pill_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            tabindex: if is_selected { "0" } else { "-1" },
                            disabled: empty,
                            onclick: move |_| {
                                on_select.call(cat_clone.clone());
                            },
                            "{cat}"
                            span { class: "pill-count", "{count}" }
                        }
                    }
                }
            }
        }
    }
}

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}

/// The next non-empty category `step` places from `selected`, wrapping
/// at either end. `None` when nothing else can be chosen.
fn neighbour(categories: &[(String, usize)], selected: &str, step: isize) -> Option<String> {
    let len = categories.len() as isize;
    let start = categories.iter().position(|(c, _)| c == selected)? as isize;

    (1..len)
        .map(|i| (start + step * i).rem_euclid(len) as usize)
        .map(|i| &categories[i])
        .find(|(_, count)| *count > 0)
        .map(|(cat, _)| cat.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pills(entries: &[(&str, usize)]) -> Vec<(String, usize)> {
        entries.iter().map(|(c, n)| (c.to_string(), *n)).collect()
    }

    #[test]
    fn selected_pill_class() {
        assert_eq!(pill_class(true), "pill selected");
        assert_eq!(pill_class(false), "pill");
    }

    #[test]
    fn arrows_wrap_around() {
        let cats = pills(&[("All", 4), ("Web", 2), ("ML", 1), ("AR", 1)]);
        assert_eq!(neighbour(&cats, "All", 1).as_deref(), Some("Web"));
        assert_eq!(neighbour(&cats, "AR", 1).as_deref(), Some("All"));
        assert_eq!(neighbour(&cats, "All", -1).as_deref(), Some("AR"));
    }

    #[test]
    fn arrows_skip_empty_categories() {
        let cats = pills(&[("All", 2), ("Web", 0), ("ML", 2)]);
        assert_eq!(neighbour(&cats, "All", 1).as_deref(), Some("ML"));
        assert_eq!(neighbour(&cats, "ML", -1).as_deref(), Some("All"));
    }

    #[test]
    fn no_neighbour_when_alone_or_unknown() {
        let cats = pills(&[("All", 0)]);
        assert_eq!(neighbour(&cats, "All", 1), None);
        assert_eq!(neighbour(&pills(&[("All", 1), ("Web", 1)]), "Quantum", 1), None);
    }
}
