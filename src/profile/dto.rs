use serde::Deserialize;

use super::repo::{AboutContent, Profile};

/// Validated input for the profile upsert. Applied as a full-field
/// overwrite, never a field-by-field patch.
#[derive(Debug, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub bio: String,
    pub role: String,
    pub location: String,
    pub status: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AboutContentInput {
    pub intro1: String,
    pub intro2: String,
}

/// In-memory value returned while no profile row exists. Not persisted
/// until the first admin write.
pub fn default_profile() -> Profile {
    Profile {
        id: 0,
        name: "Amil Mether".into(),
        bio: "Full Stack Engineer".into(),
        role: "Developer".into(),
        location: "Kochi, Kerala".into(),
        status: "Available".into(),
        whatsapp: String::new(),
    }
}

pub fn default_about_content() -> AboutContent {
    AboutContent {
        id: 0,
        intro1: "Hi, I'm Amil Mether. I'm a Computer Engineering student with a passion for \
                 building things that live on the internet and in the physical world."
            .into(),
        intro2: "My journey started with simple HTML pages, but quickly evolved into full-stack \
                 web applications and embedded systems. I love the intersection of software and \
                 hardware, making code interact with the real world."
            .into(),
    }
}
