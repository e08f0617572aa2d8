use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct TimelineItemInput {
    pub date: String,
    pub title: String,
    pub description: String,
}
