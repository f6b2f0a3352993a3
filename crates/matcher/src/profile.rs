/// One freelancer profile row
///
/// Immutable after load. Columns keep the order of the source file so the
/// rendered content is stable across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    fields: Vec<(String, String)>,
}

impl Profile {
    /// Create a profile from ordered (column, value) pairs
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Ordered (column, value) pairs
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Look up a single column value
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Render the profile as "column: value" lines for embedding
    pub fn content(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pairing of a profile with its similarity score against a query
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    /// The matched profile
    pub profile: Profile,

    /// Cosine similarity against the query embedding
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        Profile::new(vec![
            ("name".to_string(), "김하나".to_string()),
            ("skills".to_string(), "React, TypeScript".to_string()),
        ])
    }

    #[test]
    fn test_content_renders_column_lines() {
        assert_eq!(sample().content(), "name: 김하나\nskills: React, TypeScript");
    }

    #[test]
    fn test_get_by_column() {
        let profile = sample();
        assert_eq!(profile.get("name"), Some("김하나"));
        assert_eq!(profile.get("missing"), None);
    }
}
