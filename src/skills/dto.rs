use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SkillCategoryInput {
    pub name: String,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Deserialize)]
pub struct SkillInput {
    pub name: String,
    pub category: String,
}
