use anyhow::Context;
use axum::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::SmtpConfig;

/// Fields forwarded to the operator's inbox after a contact message is
/// persisted.
#[derive(Debug, Clone)]
pub struct ContactNotification {
    pub name: String,
    pub email: String,
    pub message_type: String,
    pub budget: Option<String>,
    pub whatsapp: Option<String>,
    pub message: String,
}

/// Outbound notification channel. Delivery is strictly best-effort: callers
/// log a failed send and move on, the persisted message row is the durable
/// record.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_contact(&self, notification: &ContactNotification) -> anyhow::Result<()>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig, password: &str) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .context("build smtp transport")?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), password.to_string()))
            .build();
        Ok(Self {
            transport,
            from: config.user.parse().context("parse SMTP_USER mailbox")?,
            to: config.inbox.parse().context("parse CONTACT_INBOX mailbox")?,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_contact(&self, n: &ContactNotification) -> anyhow::Result<()> {
        let reply_to: Mailbox = n
            .email
            .parse()
            .with_context(|| format!("parse reply-to address {}", n.email))?;

        let body = format!(
            "New contact form submission\n\n\
             Name: {}\n\
             Email: {}\n\
             Type: {}\n\
             Budget: {}\n\
             WhatsApp: {}\n\n\
             Message:\n{}\n\n\
             ---\nReply to: {}\n",
            n.name,
            n.email,
            n.message_type,
            n.budget.as_deref().unwrap_or("Not specified"),
            n.whatsapp.as_deref().unwrap_or("Not provided"),
            n.message,
            n.email,
        );

        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .reply_to(reply_to)
            .subject(format!("New Contact Form Submission - {}", n.message_type))
            .body(body)
            .context("build notification email")?;

        self.transport
            .send(email)
            .await
            .context("smtp send_contact")?;
        info!(to = %self.to, "contact notification sent");
        Ok(())
    }
}

/// Installed when SMTP credentials are absent; keeps the contact route fully
/// functional without a mail account.
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send_contact(&self, n: &ContactNotification) -> anyhow::Result<()> {
        info!(name = %n.name, "mailer disabled, dropping contact notification");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactNotification {
        ContactNotification {
            name: "A".into(),
            email: "a@x.com".into(),
            message_type: "Inquiry".into(),
            budget: None,
            whatsapp: None,
            message: "Hi".into(),
        }
    }

    #[tokio::test]
    async fn noop_mailer_always_succeeds() {
        NoopMailer.send_contact(&sample()).await.unwrap();
    }

    #[tokio::test]
    async fn smtp_mailer_rejects_malformed_operator_mailbox() {
        let config = SmtpConfig {
            host: "localhost".into(),
            port: 587,
            user: "not a mailbox".into(),
            password: Some("pw".into()),
            inbox: "inbox@localhost".into(),
        };
        assert!(SmtpMailer::new(&config, "pw").is_err());
    }
}
