//!
//! The benchmark runner filters.
//!

use std::collections::HashSet;

use benchmark_report::Category;

use crate::suite::definition::Definition;

///
/// The benchmark runner filters.
///
/// Empty filter sets select everything.
///
#[derive(Debug)]
pub struct Filters {
    /// The benchmark key filters.
    benchmark_filters: HashSet<String>,
    /// The category filters.
    category_filters: HashSet<String>,
}

impl Filters {
    /// The category filter value selecting both categories.
    const CATEGORY_ALL: &'static str = "all";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(benchmark_filters: Vec<String>, category_filters: Vec<String>) -> Self {
        Self {
            benchmark_filters: benchmark_filters.into_iter().collect(),
            category_filters: category_filters.into_iter().collect(),
        }
    }

    ///
    /// Checks if the benchmark definition is compatible with the filters.
    ///
    pub fn check(&self, definition: &Definition) -> bool {
        self.check_benchmark(definition.key) && self.check_category(definition.category)
    }

    ///
    /// Checks if the benchmark key is compatible with the filters.
    ///
    fn check_benchmark(&self, key: &str) -> bool {
        self.benchmark_filters.is_empty()
            || self
                .benchmark_filters
                .iter()
                .any(|filter| key.contains(filter.as_str()))
    }

    ///
    /// Checks if the category is compatible with the filters.
    ///
    /// `all` selects both categories, like an empty filter set.
    ///
    fn check_category(&self, category: Category) -> bool {
        self.category_filters.is_empty()
            || self.category_filters.contains(Self::CATEGORY_ALL)
            || self.category_filters.contains(&category.to_string())
    }
}

#[cfg(test)]
mod tests {
    use benchmark_report::Scale;

    use crate::suite;

    use super::Filters;

    #[test]
    fn empty_filters_select_everything() {
        let filters = Filters::new(vec![], vec![]);
        for definition in suite::catalog(Scale::M1) {
            assert!(filters.check(&definition));
        }
    }

    #[test]
    fn category_all_selects_everything() {
        let filters = Filters::new(vec![], vec!["all".to_owned()]);
        let catalog = suite::catalog(Scale::M1);
        let selected = catalog
            .iter()
            .filter(|definition| filters.check(definition))
            .count();
        assert_eq!(selected, catalog.len());
    }

    #[test]
    fn category_filter_selects_capability_gaps_only() {
        let filters = Filters::new(vec![], vec!["capability".to_owned()]);
        let selected = suite::catalog(Scale::M1)
            .into_iter()
            .filter(|definition| filters.check(definition))
            .count();
        assert_eq!(selected, 3);
    }

    #[test]
    fn benchmark_filter_matches_substrings() {
        let filters = Filters::new(vec!["join".to_owned()], vec![]);
        let selected: Vec<&'static str> = suite::catalog(Scale::M1)
            .into_iter()
            .filter(|definition| filters.check(definition))
            .map(|definition| definition.key)
            .collect();
        assert_eq!(selected, vec!["patient_event_join"]);
    }
}
