use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestimonialInput {
    pub client_name: String,
    pub role: String,
    pub text: String,
}
