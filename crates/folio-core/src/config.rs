//! Site configuration
//!
//! Everything a visitor sees that is not code: names, texts, the project
//! catalogue, animation tuning. Loaded from a JSON file when one is given,
//! otherwise [`SiteConfig::default`] supplies the built-in content. Missing
//! keys fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::particles::ParticleEffect;
use crate::projects::ALL_CATEGORIES;
use crate::types::{
    default_achievements, default_projects, default_skills, default_socials, Achievement, Project,
    Skill, SocialLink,
};

/// A typewriter line and its cadence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedText {
    pub text: String,
    /// Milliseconds per revealed character
    pub interval_ms: u64,
}

impl TypedText {
    pub fn new(text: &str, interval_ms: u64) -> Self {
        Self {
            text: text.to_string(),
            interval_ms,
        }
    }
}

/// Burst shapes for each interactive element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub button: ParticleEffect,
    pub social: ParticleEffect,
    pub avatar: ParticleEffect,
    pub cube: ParticleEffect,
    /// Drifting points in header and footer backgrounds
    pub ambient_count: usize,
    /// Frame period for the cube and ambient fields
    pub frame_ms: u64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            button: ParticleEffect::BUTTON,
            social: ParticleEffect::SOCIAL,
            avatar: ParticleEffect::AVATAR,
            cube: ParticleEffect::CUBE,
            ambient_count: 50,
            frame_ms: 16,
        }
    }
}

/// Whole-site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand shown in the header logo and footer
    pub owner: String,
    pub home_hero: TypedText,
    pub home_tagline: String,
    pub about_bio: TypedText,
    pub about_details: String,
    pub contact_hero: TypedText,
    pub contact_intro: String,
    pub projects_intro: String,
    /// Target of the "Download Resume" button
    pub resume_href: String,
    pub copyright_year: u16,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub achievements: Vec<Achievement>,
    pub socials: Vec<SocialLink>,
    pub effects: EffectsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "SK-TECHNOLOGY-801".to_string(),
            home_hero: TypedText::new("Welcome to My Portfolio", 100),
            home_tagline: "Discover cutting-edge projects with a futuristic twist. Hover over the 3D cube to make it vanish with a particle burst!".to_string(),
            about_bio: TypedText::new(
                "I’m a passionate developer with expertise in web development, 3D graphics, and innovative technologies.",
                50,
            ),
            about_details: "With a focus on creating immersive and innovative solutions, I specialize in blending modern web technologies with 3D graphics to deliver unique user experiences. Explore my journey and skills below!".to_string(),
            contact_hero: TypedText::new("Get in Touch", 100),
            contact_intro: "Reach out to collaborate, discuss projects, or just say hello! Fill out the form below or connect via social media.".to_string(),
            projects_intro: "Explore a collection of innovative projects showcasing web development, machine learning, and augmented reality.".to_string(),
            resume_href: "/resume.pdf".to_string(),
            copyright_year: 2025,
            projects: default_projects(),
            skills: default_skills(),
            achievements: default_achievements(),
            socials: default_socials(),
            effects: EffectsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), projects = config.projects.len(), "Loaded site config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pages cannot render sensibly
    pub fn validate(&self) -> SiteResult<()> {
        for typed in [&self.home_hero, &self.about_bio, &self.contact_hero] {
            if typed.interval_ms == 0 {
                return Err(SiteError::InvalidConfig(format!(
                    "typing interval for {:?} is zero",
                    typed.text
                )));
            }
        }

        for project in &self.projects {
            if project.category.trim().is_empty() {
                return Err(SiteError::InvalidConfig(format!(
                    "project {:?} has an empty category",
                    project.title
                )));
            }
            if project.category == ALL_CATEGORIES {
                return Err(SiteError::InvalidConfig(format!(
                    "project {:?} uses the reserved category {:?}",
                    project.title, ALL_CATEGORIES
                )));
            }
        }

        if let Some(skill) = self.skills.iter().find(|s| s.proficiency > 100) {
            return Err(SiteError::InvalidConfig(format!(
                "skill {:?} has proficiency {} over 100",
                skill.name, skill.proficiency
            )));
        }

        let effects = [
            ("button", &self.effects.button),
            ("social", &self.effects.social),
            ("avatar", &self.effects.avatar),
            ("cube", &self.effects.cube),
        ];
        for (name, effect) in effects {
            effect
                .check()
                .map_err(|reason| SiteError::InvalidConfig(format!("{} effect: {}", name, reason)))?;
        }

        if self.effects.frame_ms == 0 {
            return Err(SiteError::InvalidConfig("frame period is zero".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = SiteConfig::from_json(r#"{"owner": "Ada"}"#).unwrap();
        assert_eq!(config.owner, "Ada");
        assert_eq!(config.projects.len(), 4);
        assert_eq!(config.contact_hero.text, "Get in Touch");
    }

    #[test]
    fn zero_interval_rejected() {
        let err = SiteConfig::from_json(r#"{"home_hero": {"text": "Hi", "interval_ms": 0}}"#)
            .unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn reserved_category_rejected() {
        let mut config = SiteConfig::default();
        config.projects[0].category = "All".to_string();
        assert!(matches!(config.validate(), Err(SiteError::InvalidConfig(_))));
    }

    #[test]
    fn over_full_skill_rejected() {
        let mut config = SiteConfig::default();
        config.skills.push(Skill::new("Everything", 101));
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_tick_step_rejected() {
        let err = SiteConfig::from_json(
            r#"{"effects": {"avatar": {"count": 5,
                "spread": {"kind": "planar", "radius": 50.0},
                "decay": {"kind": "tick", "interval_ms": 50, "step": -0.02}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(ref m) if m.starts_with("avatar")));
    }

    #[test]
    fn overflowing_spread_rejected() {
        let err = SiteConfig::from_json(
            r#"{"effects": {"button": {"count": 1,
                "spread": {"kind": "planar", "radius": 3.0e38},
                "decay": {"kind": "timeout", "lifetime_ms": 1000}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(ref m) if m.starts_with("button")));
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(
            SiteConfig::from_json("{ owner: "),
            Err(SiteError::Json(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"copyright_year": 2026, "skills": []}}"#).unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.copyright_year, 2026);
        assert!(config.skills.is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = SiteConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SiteError::Io(_)));
    }
}
