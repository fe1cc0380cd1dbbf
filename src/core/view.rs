use std::collections::BTreeSet;

use crate::core::query::FilterState;
use crate::models::Advocate;

/// Choices offered by the city and degree pickers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub degrees: Vec<String>,
}

/// Sorted, de-duplicated cities and degrees present in a result set
pub fn filter_options(advocates: &[Advocate]) -> FilterOptions {
    let cities: BTreeSet<&str> = advocates.iter().map(|a| a.city.as_str()).collect();
    let degrees: BTreeSet<&str> = advocates.iter().map(|a| a.degree.as_str()).collect();

    FilterOptions {
        cities: cities.into_iter().map(String::from).collect(),
        degrees: degrees.into_iter().map(String::from).collect(),
    }
}

/// One-line description of the visible results, e.g.
/// `Showing 2 advocates matching "anx" in Austin with PhD`
pub fn results_summary(count: usize, filters: &FilterState) -> String {
    let mut summary = format!(
        "Showing {} advocate{}",
        count,
        if count == 1 { "" } else { "s" }
    );

    if !filters.search.is_empty() {
        summary.push_str(&format!(" matching \"{}\"", filters.search));
    }
    if !filters.city.is_empty() {
        summary.push_str(&format!(" in {}", filters.city));
    }
    if !filters.degree.is_empty() {
        summary.push_str(&format!(" with {}", filters.degree));
    }

    summary
}
