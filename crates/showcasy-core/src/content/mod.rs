//! Static portfolio content
//!
//! All records are built once into a [`Catalog`] at startup and never mutated.

pub mod data;
pub mod models;

use std::collections::HashSet;

use tracing::debug;

pub use models::{
    ApproachStep, Award, BlogPost, CardSize, Client, Experience, Metric, Project, Skill,
    Testimonial,
};

use crate::{Error, Result};

/// Read-only collection of every fixture record
#[derive(Debug, Clone)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub clients: Vec<Client>,
    pub testimonials: Vec<Testimonial>,
    pub awards: Vec<Award>,
    pub experience: Vec<Experience>,
    pub blog_posts: Vec<BlogPost>,
    pub approach_steps: Vec<ApproachStep>,
    pub skills: Vec<Skill>,
}

impl Catalog {
    /// Build the built-in catalog, failing fast on bad slugs
    pub fn load() -> Result<Self> {
        Self::with_projects(data::projects())
    }

    /// Build a catalog around the given projects (other sections use the built-in data)
    pub fn with_projects(projects: Vec<Project>) -> Result<Self> {
        validate_slugs(&projects)?;
        debug!(projects = projects.len(), "Content catalog loaded");

        Ok(Self {
            projects,
            clients: data::clients(),
            testimonials: data::testimonials(),
            awards: data::awards(),
            experience: data::experience(),
            blog_posts: data::blog_posts(),
            approach_steps: data::approach_steps(),
            skills: data::skills(),
        })
    }

    /// Look up a project by slug
    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    /// Up to `limit` projects other than `slug`, for "What's next?"
    pub fn other_projects(&self, slug: &str, limit: usize) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.slug != slug)
            .take(limit)
            .collect()
    }

    /// Every image path referenced by the content
    pub fn image_paths(&self) -> Vec<&'static str> {
        self.projects
            .iter()
            .map(|p| p.image)
            .chain(self.blog_posts.iter().map(|b| b.image))
            .collect()
    }
}

/// Slugs are route segments: non-empty, lowercase ASCII letters, digits and '-'
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Reject empty, non URL-safe and duplicate slugs
pub fn validate_slugs(projects: &[Project]) -> Result<()> {
    let mut seen = HashSet::new();
    for project in projects {
        if !is_valid_slug(project.slug) {
            return Err(Error::InvalidSlug(project.slug.to_string()));
        }
        if !seen.insert(project.slug) {
            return Err(Error::DuplicateSlug(project.slug.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.projects.len(), 3);
        assert!(catalog.project("wepay").is_some());
        assert!(catalog.project("does-not-exist").is_none());
        assert_eq!(catalog.approach_steps.len(), 5);
        assert_eq!(catalog.skills.len(), 20);
    }

    #[test]
    fn test_duplicate_slug_fails_fast() {
        let mut projects = data::projects();
        let mut copy = projects[1].clone();
        copy.title = "Wepay (copy)";
        projects.push(copy);

        let err = Catalog::with_projects(projects).unwrap_err();
        assert!(matches!(err, Error::DuplicateSlug(ref s) if s == "wepay"));
    }

    #[test]
    fn test_slug_with_space_is_rejected() {
        let mut projects = data::projects();
        projects[0].slug = "Safe Space";
        let err = Catalog::with_projects(projects).unwrap_err();
        assert!(matches!(err, Error::InvalidSlug(_)));
    }

    #[test]
    fn test_other_projects_excludes_current() {
        let catalog = Catalog::load().unwrap();
        let others = catalog.other_projects("wepay", 2);
        assert_eq!(others.len(), 2);
        assert!(others.iter().all(|p| p.slug != "wepay"));
    }

    #[test]
    fn test_project_helpers() {
        let catalog = Catalog::load().unwrap();
        let safe_space = catalog.project("safe-space").unwrap();
        assert_eq!(safe_space.path(), "/works/safe-space");
        assert_eq!(safe_space.display_date(), "January 25, 2026");
        assert!(safe_space.website_url().is_some());
        assert!(catalog.project("wepay").unwrap().website_url().is_none());
    }
}
