//! Project catalogue filtering

use crate::types::Project;

/// Category that matches every project
pub const ALL_CATEGORIES: &str = "All";

/// Projects in `category`, in catalogue order.
///
/// [`ALL_CATEGORIES`] returns the whole catalogue; an unknown category
/// returns nothing.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect()
}

/// Filter choices for a catalogue: "All" then each category by first appearance
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut cats = vec![ALL_CATEGORIES.to_string()];
    for p in projects {
        if !cats.contains(&p.category) {
            cats.push(p.category.clone());
        }
    }
    cats
}

/// Each filter choice with how many projects it would show, in the
/// order of [`categories`]
pub fn category_counts(projects: &[Project]) -> Vec<(String, usize)> {
    categories(projects)
        .into_iter()
        .map(|cat| {
            let n = filter_projects(projects, &cat).len();
            (cat, n)
        })
        .collect()
}
