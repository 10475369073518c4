use serde::{Deserialize, Serialize};

/// Display-ready project record for the portfolio gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Currently identical to `description`. Known duplication carried over
    /// from the original data model; do not fold the two fields together.
    pub long_description: String,
    pub category: Category,
    /// Insertion-ordered, deduplicated. The exact order is not a contract.
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub source_url: String,
    pub featured: bool,
    /// Four-digit UTC year of the repository's last update
    pub year: String,
}

/// Coarse classification bucket for a project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Data,
    Web,
    Fullstack,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Data => "data",
            Category::Web => "web",
            Category::Fullstack => "fullstack",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Data).unwrap(), "\"data\"");
        assert_eq!(serde_json::to_string(&Category::Web).unwrap(), "\"web\"");
        assert_eq!(
            serde_json::to_string(&Category::Fullstack).unwrap(),
            "\"fullstack\""
        );
    }

    #[test]
    fn test_category_display_matches_as_str() {
        for cat in [Category::Data, Category::Web, Category::Fullstack] {
            assert_eq!(cat.to_string(), cat.as_str());
        }
    }
}
