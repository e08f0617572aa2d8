use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

/// Public contact-form submission. `type` categorizes the inquiry
/// (e.g. "Inquiry", "Project").
#[derive(Debug, Deserialize)]
pub struct MessageInput {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    pub message: String,
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

impl MessageInput {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if !is_valid_email(self.email.trim()) {
            return Err("invalid email".into());
        }
        if self.message_type.trim().is_empty() {
            return Err("type must not be empty".into());
        }
        if self.message.trim().is_empty() {
            return Err("message must not be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(email: &str) -> MessageInput {
        MessageInput {
            name: "A".into(),
            email: email.into(),
            message_type: "Inquiry".into(),
            budget: None,
            whatsapp: None,
            message: "Hi".into(),
        }
    }

    #[test]
    fn accepts_well_formed_submission() {
        assert!(input("a@x.com").validate().is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(input("not-an-email").validate().is_err());
        assert!(input("a@b").validate().is_err());
        assert!(input("").validate().is_err());
    }

    #[test]
    fn rejects_empty_required_fields() {
        let mut m = input("a@x.com");
        m.message = "  ".into();
        assert!(m.validate().is_err());

        let mut m = input("a@x.com");
        m.name = String::new();
        assert!(m.validate().is_err());
    }

    #[test]
    fn type_field_uses_json_name() {
        let m: MessageInput = serde_json::from_str(
            r#"{"name":"A","email":"a@x.com","type":"Inquiry","message":"Hi"}"#,
        )
        .unwrap();
        assert_eq!(m.message_type, "Inquiry");
        assert!(m.budget.is_none());
        assert!(m.whatsapp.is_none());
    }
}
