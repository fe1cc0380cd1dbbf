/// Path of the advocates list endpoint
pub const ADVOCATES_PATH: &str = "/api/advocates";

/// Raw filter inputs as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub search: String,
    pub city: String,
    pub degree: String,
}

impl FilterState {
    pub fn new(
        search: impl Into<String>,
        city: impl Into<String>,
        degree: impl Into<String>,
    ) -> Self {
        Self {
            search: search.into(),
            city: city.into(),
            degree: degree.into(),
        }
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.city.is_empty() && self.degree.is_empty()
    }

    /// Serialize non-empty filters as a query string
    ///
    /// Parameters appear in the order `search`, `city`, `degree`, values are
    /// percent-encoded (space becomes `%20`). Returns an empty string when no
    /// filter is set, otherwise the result starts with `?`.
    pub fn query_string(&self) -> String {
        let params: Vec<String> = [
            ("search", &self.search),
            ("city", &self.city),
            ("degree", &self.degree),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }

    /// Request path for the list endpoint with these filters applied
    pub fn advocates_path(&self) -> String {
        format!("{}{}", ADVOCATES_PATH, self.query_string())
    }
}
