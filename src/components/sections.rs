//! Content sections shared by several pages

use dioxus::prelude::*;
use folio_core::{Achievement, Project, Skill};
use folio_ui::Reveal;

use crate::app::Route;

/// Links leaving the site open in a new window; anything else goes to the
/// projects page.
fn is_external(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

/// Side of the timeline an entry sits on
fn timeline_side(index: usize) -> &'static str {
    if index % 2 == 0 {
        "timeline-entry left"
    } else {
        "timeline-entry right"
    }
}

/// Skill cards with proficiency bars
#[component]
pub fn SkillsGrid(skills: Vec<Skill>) -> Element {
    rsx! {
        Reveal { class: "section skills",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-grid",
                for skill in skills.iter() {
                    div { key: "{skill.name}", class: "skill-card glass",
                        span { class: "skill-name", "{skill.name}" }
                        div { class: "skill-bar",
                            role: "progressbar",
                            "aria-valuenow": "{skill.proficiency}",
                            "aria-valuemin": "0",
                            "aria-valuemax": "100",
                            div { class: "skill-bar-fill", style: "width: {skill.bar_width()};" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectCard(project: Project) -> Element {
    rsx! {
        article { class: "project-card glass",
            img { class: "project-image", src: "{project.image}", alt: "{project.title}" }
            span { class: "project-category", "{project.category}" }
            h3 { class: "project-title", "{project.title}" }
            p { class: "project-description", "{project.description}" }
            if is_external(&project.link) {
                a {
                    class: "project-link",
                    href: "{project.link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View Project →"
                }
            } else {
                Link { to: Route::Projects {}, class: "project-link", "View Project →" }
            }
        }
    }
}

/// Grid of project cards; shows a hint when nothing matches
#[component]
pub fn ProjectGrid(projects: Vec<Project>) -> Element {
    rsx! {
        section { class: "project-grid",
            if projects.is_empty() {
                p { class: "empty-hint", "No projects in this category yet." }
            }
            for project in projects.iter() {
                ProjectCard { key: "{project.title}", project: project.clone() }
            }
        }
    }
}

/// Vertical timeline, entries alternating sides
#[component]
pub fn AchievementsTimeline(achievements: Vec<Achievement>) -> Element {
    rsx! {
        Reveal { class: "section achievements",
            h2 { class: "section-title", "Achievements" }
            div { class: "timeline",
                div { class: "timeline-line" }
                for (index, achievement) in achievements.iter().enumerate() {
                    div { key: "{achievement.year}-{index}", class: timeline_side(index),
                        div { class: "timeline-body",
                            h3 { class: "timeline-year", "{achievement.year}" }
                            p { class: "timeline-event", "{achievement.event}" }
                        }
                        div { class: "timeline-dot" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_links() {
        assert!(is_external("https://github.com/sk-technology801"));
        assert!(!is_external("/projects/one"));
    }

    #[test]
    fn timeline_alternates() {
        assert_eq!(timeline_side(0), "timeline-entry left");
        assert_eq!(timeline_side(1), "timeline-entry right");
        assert_eq!(timeline_side(2), "timeline-entry left");
    }
}
