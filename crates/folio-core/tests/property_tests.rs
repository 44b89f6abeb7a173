//! Property-based tests for the site's state types
//!
//! Uses proptest to verify invariants of particle fields, the typewriter,
//! the project filter, the theme toggle and form validation.

use folio_core::contact::is_valid_email;
use folio_core::{
    filter_projects, validate, DecayPolicy, FormData, FormField, ParticleField, Point, Project,
    Spread, Theme, ThemeController, Typewriter, ALL_CATEGORIES,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Strategy Generators
// ============================================================================

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Web".to_string()),
        Just("ML".to_string()),
        Just("AR".to_string()),
        Just("Games".to_string()),
    ]
}

fn project_strategy() -> impl Strategy<Value = Project> {
    (prop::string::string_regex("[A-Za-z ]{1,20}").expect("valid regex"), category_strategy())
        .prop_map(|(title, category)| Project {
            description: format!("About {}", title),
            link: format!("/projects/{}", title.to_lowercase().replace(' ', "-")),
            image: String::new(),
            title,
            category,
        })
}

/// Operations on a particle field
#[derive(Debug, Clone)]
enum FieldOp {
    Spawn(usize),
    Decay,
    RemoveFirst,
}

fn field_ops_strategy() -> impl Strategy<Value = Vec<FieldOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => (0..8usize).prop_map(FieldOp::Spawn),
            3 => Just(FieldOp::Decay),
            1 => Just(FieldOp::RemoveFirst),
        ],
        0..200,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Spawning n particles grows the active set by exactly n
    #[test]
    fn spawn_grows_by_count(counts in prop::collection::vec(0..20usize, 1..10), seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new(DecayPolicy::timeout(1000));

        for n in counts {
            let before = field.len();
            let ids = field.spawn(Point::ORIGIN, n, Spread::Planar(10.0), &mut rng);
            prop_assert_eq!(ids.len(), n);
            prop_assert_eq!(field.len(), before + n);
        }
    }

    /// Offsets never leave the configured spread
    #[test]
    fn offsets_within_spread(radius in 0.0f32..100.0, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new(DecayPolicy::timeout(1000));
        field.spawn(Point::ORIGIN, 25, Spread::Spatial(radius), &mut rng);

        for p in field.iter() {
            prop_assert!(p.offset.x.abs() <= radius);
            prop_assert!(p.offset.y.abs() <= radius);
            prop_assert!(p.offset.z.abs() <= radius);
        }
    }

    /// No sequence of operations leaves a faded particle visible
    #[test]
    fn no_faded_particle_survives(ops in field_ops_strategy(), step in 0.01f32..0.5, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new(DecayPolicy::tick(50, step));

        for op in ops {
            match op {
                FieldOp::Spawn(n) => { field.spawn(Point::ORIGIN, n, Spread::Planar(50.0), &mut rng); }
                FieldOp::Decay => { field.decay(); }
                FieldOp::RemoveFirst => {
                    let first = field.iter().next().map(|p| p.id);
                    if let Some(id) = first {
                        prop_assert!(field.remove(id));
                    }
                }
            }
            prop_assert!(field.iter().all(|p| p.opacity > 0.0 && p.opacity <= 1.0));
        }
    }

    /// Sampled typewriter output only ever grows, as a prefix of the full text
    #[test]
    fn typewriter_is_monotonic_prefix(text in ".{0,60}", samples in prop::collection::vec(0..4usize, 0..40)) {
        let mut tw = Typewriter::new(text.clone());
        let mut previous = String::new();

        for advances in samples {
            for _ in 0..advances {
                tw.advance();
            }
            let now = tw.revealed().to_string();
            prop_assert!(text.starts_with(&now));
            prop_assert!(now.starts_with(&previous));
            previous = now;
        }
    }

    /// Advancing until complete visits exactly the prefix sequence
    #[test]
    fn typewriter_matches_prefixes(text in ".{0,40}") {
        let mut tw = Typewriter::new(text.clone());
        let mut seen = Vec::new();
        while let Some(prefix) = tw.advance() {
            seen.push(prefix.to_string());
        }
        let expected: Vec<String> = tw.prefixes().map(str::to_string).collect();
        prop_assert_eq!(seen.len(), text.chars().count());
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(tw.revealed(), text.as_str());
    }

    /// "All" is the identity; any other category keeps order and only matches
    #[test]
    fn filter_is_ordered_subsequence(projects in prop::collection::vec(project_strategy(), 0..15), cat in category_strategy()) {
        let all = filter_projects(&projects, ALL_CATEGORIES);
        prop_assert_eq!(all.len(), projects.len());
        prop_assert!(all.iter().zip(projects.iter()).all(|(a, b)| *a == b));

        let filtered = filter_projects(&projects, &cat);
        prop_assert!(filtered.iter().all(|p| p.category == cat));
        prop_assert_eq!(filtered.len(), projects.iter().filter(|p| p.category == cat).count());

        let mut cursor = 0;
        for p in &filtered {
            let pos = projects[cursor..].iter().position(|q| std::ptr::eq(q, *p));
            prop_assert!(pos.is_some());
            cursor += pos.unwrap_or(0) + 1;
        }
    }

    /// Toggling twice is the identity
    #[test]
    fn toggle_is_involution(dark: bool, rounds in 0..10usize) {
        let start = if dark { Theme::Dark } else { Theme::Light };
        let mut ctl = ThemeController::new(start);
        for _ in 0..rounds {
            ctl.toggle();
            ctl.toggle();
        }
        prop_assert_eq!(ctl.current(), start);
    }

    /// Each field's error is present exactly when its rule fails
    #[test]
    fn validation_matches_rules(name in "\\PC{0,10}", email in "[a-z@. ]{0,12}", message in "\\PC{0,10}") {
        let data = FormData::new(&name, &email, &message);
        let errors = validate(&data);

        prop_assert_eq!(errors.get(FormField::Name).is_some(), name.trim().is_empty());
        prop_assert_eq!(errors.get(FormField::Message).is_some(), message.trim().is_empty());

        let trimmed = email.trim();
        let expected = if trimmed.is_empty() {
            Some("Email is required")
        } else if !is_valid_email(trimmed) {
            Some("Email is invalid")
        } else {
            None
        };
        prop_assert_eq!(errors.get(FormField::Email), expected);
        prop_assert_eq!(errors.is_empty(), errors.len() == 0);
    }
}
