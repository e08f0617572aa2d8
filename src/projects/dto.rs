use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub detailed_description: String,
    pub stack: Vec<String>,
    pub category: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

fn default_priority() -> String {
    "Medium".into()
}

#[derive(Debug, Deserialize)]
pub struct ProjectListQuery {
    #[serde(default)]
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let input: ProjectInput = serde_json::from_str(
            r#"{
                "title": "Site",
                "slug": "site",
                "short_description": "s",
                "detailed_description": "d",
                "stack": ["Rust"],
                "category": "Web"
            }"#,
        )
        .unwrap();
        assert_eq!(input.priority, "Medium");
        assert!(input.link.is_none());
        assert!(input.images.is_empty());
        assert!(!input.featured);
    }

    #[test]
    fn featured_query_defaults_to_false() {
        let q: ProjectListQuery = serde_json::from_str("{}").unwrap();
        assert!(!q.featured);
    }
}
