use crate::models::{Advocate, AdvocateQuery};

/// Trim a raw filter value, treating blank input as absent
fn normalize(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Free-text match against names, city, degree, specialties and experience
///
/// `needle` must already be lowercased.
#[inline]
pub fn matches_search(advocate: &Advocate, needle: &str) -> bool {
    advocate.first_name.to_lowercase().contains(needle)
        || advocate.last_name.to_lowercase().contains(needle)
        || advocate.city.to_lowercase().contains(needle)
        || advocate.degree.to_lowercase().contains(needle)
        || advocate
            .specialties
            .iter()
            .any(|specialty| specialty.to_lowercase().contains(needle))
        || advocate.years_of_experience.to_string().contains(needle)
}

/// Case-insensitive exact city match
#[inline]
pub fn matches_city(advocate: &Advocate, city: &str) -> bool {
    advocate.city.to_lowercase() == city.to_lowercase()
}

/// Case-insensitive exact degree match
#[inline]
pub fn matches_degree(advocate: &Advocate, degree: &str) -> bool {
    advocate.degree.to_uppercase() == degree.to_uppercase()
}

/// Apply list-endpoint filters to a full table scan
///
/// Blank filters are ignored. Input order is preserved.
pub fn apply_filters(advocates: Vec<Advocate>, query: &AdvocateQuery) -> Vec<Advocate> {
    let search = normalize(query.search.as_deref()).map(str::to_lowercase);
    let city = normalize(query.city.as_deref());
    let degree = normalize(query.degree.as_deref());

    advocates
        .into_iter()
        .filter(|a| search.as_deref().map_or(true, |s| matches_search(a, s)))
        .filter(|a| city.map_or(true, |c| matches_city(a, c)))
        .filter(|a| degree.map_or(true, |d| matches_degree(a, d)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn create_test_advocate(id: i32, first: &str, city: &str, degree: &str, years: i32) -> Advocate {
        Advocate {
            id,
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            city: city.to_string(),
            degree: degree.to_string(),
            specialties: vec!["Trauma & PTSD".to_string()],
            years_of_experience: years,
            phone_number: "5550000000".to_string(),
            created_at: Utc::now(),
        }
    }

    fn query(search: Option<&str>, city: Option<&str>, degree: Option<&str>) -> AdvocateQuery {
        AdvocateQuery {
            search: search.map(String::from),
            city: city.map(String::from),
            degree: degree.map(String::from),
        }
    }

    #[test]
    fn test_search_matches_specialty() {
        let advocate = create_test_advocate(1, "John", "New York", "MD", 10);
        assert!(matches_search(&advocate, "ptsd"));
        assert!(!matches_search(&advocate, "eating"));
    }

    #[test]
    fn test_search_matches_experience_digits() {
        let advocate = create_test_advocate(1, "John", "New York", "MD", 12);
        assert!(matches_search(&advocate, "12"));
        assert!(matches_search(&advocate, "2"));
        assert!(!matches_search(&advocate, "13"));
    }

    #[test]
    fn test_city_is_exact_not_substring() {
        let advocates = vec![
            create_test_advocate(1, "A", "San Antonio", "MD", 1),
            create_test_advocate(2, "B", "San Jose", "MD", 1),
        ];
        let result = apply_filters(advocates, &query(None, Some("  san jose "), None));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_blank_filters_ignored() {
        let advocates = vec![
            create_test_advocate(1, "A", "Dallas", "MSW", 4),
            create_test_advocate(2, "B", "Austin", "PhD", 10),
        ];
        let result = apply_filters(advocates, &query(Some("   "), Some(""), None));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filters_combine() {
        let advocates = vec![
            create_test_advocate(1, "Anna", "Dallas", "MSW", 4),
            create_test_advocate(2, "Anna", "Dallas", "PhD", 10),
            create_test_advocate(3, "Bert", "Dallas", "phd", 10),
        ];
        let result = apply_filters(advocates, &query(Some("ANNA"), Some("dallas"), Some("phd")));
        assert_eq!(result.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
    }
}
