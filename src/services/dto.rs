use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ServiceInput {
    pub title: String,
    pub short_description: String,
    pub detailed_description: String,
    pub price_from: String,
    pub deliverables: Vec<String>,
    pub stack: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_active_defaults_to_true() {
        let input: ServiceInput = serde_json::from_str(
            r#"{
                "title": "Web app",
                "short_description": "s",
                "detailed_description": "d",
                "price_from": "500",
                "deliverables": ["code"],
                "stack": ["Rust"]
            }"#,
        )
        .unwrap();
        assert!(input.is_active);
    }
}
