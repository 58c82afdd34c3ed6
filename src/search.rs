// ABOUTME: Search criteria value object and the in-memory ingredient refinement
// ABOUTME: Splits filter dimensions into a storage query and a pure post-filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipe search criteria.
//!
//! A [`SearchCriteria`] carries every filter dimension of a listing request.
//! The scalar dimensions (vegetarian flag, servings, instructions substring)
//! become a [`RecipeFilter`] evaluated at the storage layer; the ingredient
//! inclusion/exclusion sets are a membership test that is cheap to apply in
//! memory on the already-narrowed candidate set, so they are evaluated after
//! mapping instead of through a join-heavy SQL query. The refinement never
//! reorders its input.

use crate::database::recipes::RecipeFilter;

/// Request-scoped recipe filter parameters. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Exact match on the vegetarian flag; `None` matches everything
    pub is_vegetarian: Option<bool>,
    /// Exact match on the serving count; `None` matches everything
    pub servings: Option<i64>,
    /// Case-sensitive substring match on instructions; `None` or `""`
    /// matches everything
    pub instructions: Option<String>,
    /// Names that must ALL appear in a recipe's ingredient list
    pub included_ingredients: Vec<String>,
    /// Names of which NONE may appear in a recipe's ingredient list
    pub excluded_ingredients: Vec<String>,
}

impl SearchCriteria {
    /// The storage-level part of this criteria (everything but ingredients)
    #[must_use]
    pub fn storage_filter(&self) -> RecipeFilter {
        RecipeFilter {
            is_vegetarian: self.is_vegetarian,
            servings: self.servings,
            instructions: self.instructions.clone(),
        }
    }

    /// Apply the ingredient refinement to a flattened ingredient-name list.
    ///
    /// A recipe is retained iff every included name appears in `names` and
    /// no excluded name does. An empty inclusion set passes everything; the
    /// two conditions combine by conjunction.
    #[must_use]
    pub fn matches_ingredients(&self, names: &[String]) -> bool {
        if !self
            .included_ingredients
            .iter()
            .all(|included| names.iter().any(|name| name == included))
        {
            return false;
        }
        !names
            .iter()
            .any(|name| self.excluded_ingredients.iter().any(|excluded| excluded == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let criteria = SearchCriteria::default();
        assert!(criteria.matches_ingredients(&names(&["salt", "pepper"])));
        assert!(criteria.matches_ingredients(&[]));
    }

    #[test]
    fn test_included_requires_all_names() {
        let criteria = SearchCriteria {
            included_ingredients: names(&["salt", "pepper"]),
            ..SearchCriteria::default()
        };
        assert!(criteria.matches_ingredients(&names(&["pepper", "salt", "oil"])));
        assert!(!criteria.matches_ingredients(&names(&["salt"])));
    }

    #[test]
    fn test_excluded_rejects_any_present_name() {
        let criteria = SearchCriteria {
            excluded_ingredients: names(&["peanut"]),
            ..SearchCriteria::default()
        };
        assert!(criteria.matches_ingredients(&names(&["salt"])));
        assert!(!criteria.matches_ingredients(&names(&["salt", "peanut"])));
    }

    #[test]
    fn test_included_and_excluded_conjoin() {
        let criteria = SearchCriteria {
            included_ingredients: names(&["salt"]),
            excluded_ingredients: names(&["peanut"]),
            ..SearchCriteria::default()
        };
        assert!(criteria.matches_ingredients(&names(&["salt", "oil"])));
        assert!(!criteria.matches_ingredients(&names(&["salt", "peanut"])));
        assert!(!criteria.matches_ingredients(&names(&["oil"])));
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let criteria = SearchCriteria {
            included_ingredients: names(&["Salt"]),
            ..SearchCriteria::default()
        };
        assert!(!criteria.matches_ingredients(&names(&["salt"])));
    }

    #[test]
    fn test_storage_filter_carries_scalar_fields_only() {
        let criteria = SearchCriteria {
            is_vegetarian: Some(true),
            servings: Some(4),
            instructions: Some("simmer".to_owned()),
            included_ingredients: names(&["salt"]),
            excluded_ingredients: names(&["peanut"]),
        };
        let filter = criteria.storage_filter();
        assert_eq!(filter.is_vegetarian, Some(true));
        assert_eq!(filter.servings, Some(4));
        assert_eq!(filter.instructions.as_deref(), Some("simmer"));
    }
}
