//! Core types for Folio
//!
//! Static content records. None of these are mutated by the visitor; they
//! come from [`crate::SiteConfig`] and are rendered as-is.

use serde::{Deserialize, Serialize};

/// A position or offset in effect space.
///
/// Planar effects leave `z` at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn spatial(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Filter category, e.g. "Web"
    pub category: String,
    /// Path of the project's detail page
    pub link: String,
    /// Thumbnail URL
    pub image: String,
}

impl Project {
    pub fn new(title: &str, description: &str, category: &str, link: &str, image: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            link: link.to_string(),
            image: image.to_string(),
        }
    }
}

/// A skill with a proficiency bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0..=100
    pub proficiency: u8,
}

impl Skill {
    pub fn new(name: &str, proficiency: u8) -> Self {
        Self {
            name: name.to_string(),
            proficiency,
        }
    }

    /// Bar width as a CSS percentage, clamped to 100
    pub fn bar_width(&self) -> String {
        format!("{}%", self.proficiency.min(100))
    }
}

/// An entry on the achievements timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub year: String,
    pub event: String,
}

impl Achievement {
    pub fn new(year: &str, event: &str) -> Self {
        Self {
            year: year.to_string(),
            event: event.to_string(),
        }
    }
}

/// A link to an external profile, drawn as an SVG icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    /// SVG path data for a 24x24 viewBox
    pub icon: String,
}

impl SocialLink {
    pub fn new(name: &str, href: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Built-in project catalogue
pub fn default_projects() -> Vec<Project> {
    vec![
        Project::new(
            "Web Portfolio",
            "A cutting-edge portfolio with advanced animations.",
            "Web",
            "/projects/web-portfolio",
            "https://via.placeholder.com/300x200?text=Web+Portfolio",
        ),
        Project::new(
            "ML Dashboard",
            "A real-time machine learning analytics platform.",
            "ML",
            "/projects/ml-dashboard",
            "https://via.placeholder.com/300x200?text=ML+Dashboard",
        ),
        Project::new(
            "AR Experience",
            "An immersive augmented reality mobile app.",
            "AR",
            "/projects/ar-experience",
            "https://via.placeholder.com/300x200?text=AR+Experience",
        ),
        Project::new(
            "E-Commerce Platform",
            "A scalable online store with dynamic features.",
            "Web",
            "/projects/ecommerce",
            "https://via.placeholder.com/300x200?text=E-Commerce",
        ),
    ]
}

pub fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new("JavaScript", 90),
        Skill::new("React", 85),
        Skill::new("Next.js", 80),
        Skill::new("Three.js", 75),
        Skill::new("Tailwind CSS", 90),
        Skill::new("Node.js", 70),
    ]
}

pub fn default_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new("2023", "Completed Advanced React Course"),
        Achievement::new("2024", "Published Open-Source 3D Library"),
        Achievement::new("2025", "Won Hackathon for AR Innovation"),
    ]
}

pub fn default_socials() -> Vec<SocialLink> {
    vec![
        SocialLink::new(
            "GitHub",
            "https://github.com/sk-technology801",
            "M12 2C6.48 2 2 6.48 2 12c0 4.41 2.87 8.14 6.84 9.49.5.09.68-.22.68-.48v-1.7c-2.78.61-3.37-1.34-3.37-1.34-.46-1.16-1.12-1.47-1.12-1.47-.91-.62.07-.61.07-.61 1.01.07 1.54 1.03 1.54 1.03.9 1.54 2.36 1.1 2.94.84.09-.65.35-1.1.64-1.35-2.22-.25-4.55-1.11-4.55-4.94 0-1.09.39-1.98 1.03-2.68-.1-.25-.45-1.26.1-2.63 0 0 .84-.27 2.75 1.02A9.56 9.56 0 0112 6.8c.85.004 1.71.11 2.52.33 1.91-1.29 2.75-1.02 2.75-1.02.55 1.37.2 2.38.1 2.63.64.7 1.03 1.59 1.03 2.68 0 3.84-2.34 4.69-4.56 4.94.36.31.68.94.68 1.9v2.81c0 .27.18.58.69.48A10.01 10.01 0 0022 12c0-5.52-4.48-10-10-10z",
        ),
        SocialLink::new(
            "LinkedIn",
            "https://www.linkedin.com/in/sk-technology-05080b338/",
            "M20.45 20.45h-3.56v-5.57c0-1.33-.03-3.04-1.85-3.04-1.85 0-2.13 1.45-2.13 2.94v5.67H9.39V8.41h3.42v1.56h.05c.48-.91 1.65-1.87 3.39-1.87 3.62 0 4.29 2.38 4.29 5.48v6.87zM5.34 6.85c-1.15 0-2.08-.93-2.08-2.08 0-1.15.93-2.08 2.08-2.08 1.15 0 2.08.93 2.08 2.08 0 1.15-.93 2.08-2.08 2.08zm1.78 13.6H3.56V8.41h3.56v12.04zM22 0H2C.9 0 0 .9 0 2v20c0 1.1.9 2 2 2h20c1.1 0 2-.9 2-2V2c0-1.1-.9-2-2-2z",
        ),
        SocialLink::new(
            "Twitter",
            "https://x.com",
            "M18.24 4.15c.66.44 1.24.98 1.74 1.59-.64.39-1.33.69-2.07.87.75-.45 1.33-1.16 1.6-2.01-.71.42-1.5.72-2.34.88-.67-.71-1.62-1.15-2.67-1.15-2.02 0-3.66 1.64-3.66 3.66 0 .29.03.57.09.85-3.04-.15-5.74-1.61-7.55-3.82-.32.54-.5 1.17-.5 1.84 0 1.27.65 2.39 1.63 3.05-.6-.02-1.16-.18-1.65-.45v.05c0 1.78 1.27 3.27 2.95 3.61-.31.08-.63.13-.96.13-.23 0-.46-.02-.68-.07.46 1.43 1.79 2.47 3.37 2.5-1.24.98-2.8 1.56-4.49 1.56-.29 0-.58-.02-.86-.06 1.61 1.03 3.52 1.63 5.57 1.63 6.68 0 10.34-5.53 10.34-10.34 0-.16 0-.31-.01-.47.71-.51 1.33-1.15 1.82-1.88-.66.29-1.37.49-2.11.58z",
        ),
    ]
}
