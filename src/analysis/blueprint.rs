// src/analysis/blueprint.rs
//! Blueprint Selector

use tracing::debug;

use super::catalog::Catalog;
use super::models::BlueprintTemplate;

/// Template for `target_role` (exact, case-sensitive match) or the default template
pub fn select<'a>(catalog: &'a Catalog, target_role: &str) -> &'a BlueprintTemplate {
    catalog.blueprint(target_role).unwrap_or_else(|| {
        debug!(
            target_role = %target_role,
            fallback = %catalog.default_role(),
            "No blueprint for role, using default template"
        );
        catalog.default_blueprint()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_known_role() {
        let catalog = Catalog::embedded().unwrap();
        let template = select(&catalog, "Data Engineer");
        assert_eq!(
            template.title,
            "Build an End-to-End Data Pipeline for E-Commerce Analytics"
        );
        assert_eq!(template.phases.len(), 4);
        assert_eq!(template.interview_questions.len(), 5);
    }

    #[test]
    fn test_select_falls_back_without_normalisation() {
        let catalog = Catalog::embedded().unwrap();
        let default_title = &catalog.default_blueprint().title;

        assert_eq!(&select(&catalog, "DevOps Engineer").title, default_title);
        // exact match only
        assert_eq!(&select(&catalog, "data engineer").title, default_title);
        assert_eq!(&select(&catalog, " Data Engineer").title, default_title);
    }
}
