//! Outbound Email Infrastructure
//!
//! A `Mailer` trait with two implementations:
//! - [`SmtpMailer`] - real SMTP delivery via lettre
//! - [`LogMailer`] - non-production: logs the mail and returns a preview handle
//!
//! Callers that treat email as a side channel must go through
//! [`send_best_effort`], which logs failures (recipient + cause) and never
//! propagates them.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

/// Mailer errors
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Invalid mail address or content: {0}")]
    InvalidMessage(String),

    #[error("SMTP delivery failed: {0}")]
    Transport(String),
}

/// An email ready to send
#[derive(Debug, Clone)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Delivery acknowledgment
#[derive(Debug, Clone)]
pub struct MailReceipt {
    pub message_id: String,
    /// Human-viewable preview link, only in non-production configurations
    pub preview_url: Option<String>,
}

/// Email delivery contract
#[trait_variant::make(Mailer: Send)]
pub trait LocalMailer {
    /// Send one templated email, returning a delivery acknowledgment
    async fn send(&self, mail: &OutgoingMail) -> Result<MailReceipt, MailerError>;
}

/// Send an email without letting a failure escape
///
/// The contract of every notification/disclosure email in the system:
/// callers must not depend on delivery. Failures are logged with enough
/// context for offline reconciliation.
pub async fn send_best_effort<M: Mailer + Sync>(
    mailer: &M,
    mail: OutgoingMail,
) -> Option<MailReceipt> {
    match mailer.send(&mail).await {
        Ok(receipt) => {
            tracing::debug!(
                to = %mail.to,
                message_id = %receipt.message_id,
                "Email sent"
            );
            Some(receipt)
        }
        Err(e) => {
            tracing::warn!(
                to = %mail.to,
                subject = %mail.subject,
                error = %e,
                "Best-effort email failed, continuing"
            );
            None
        }
    }
}

/// Mailer configuration
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// From header, e.g. `AbroadEase <noreply@abroadease.example>`
    pub from: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
}

// ============================================================================
// SMTP implementation
// ============================================================================

/// SMTP mailer backed by lettre's tokio transport
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    pub fn new(config: &MailerConfig) -> Result<Self, MailerError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| MailerError::Transport(e.to_string()))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
        })
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<MailReceipt, MailerError> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| MailerError::InvalidMessage(format!("from: {}", e)))?,
            )
            .to(mail
                .to
                .parse()
                .map_err(|e| MailerError::InvalidMessage(format!("to: {}", e)))?)
            .subject(&mail.subject)
            .header(ContentType::TEXT_HTML)
            .body(mail.html_body.clone())
            .map_err(|e| MailerError::InvalidMessage(e.to_string()))?;

        let message_id = message
            .headers()
            .get_raw("Message-ID")
            .unwrap_or_default()
            .to_string();

        self.transport
            .send(message)
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        Ok(MailReceipt {
            message_id,
            preview_url: None,
        })
    }
}

// ============================================================================
// Log implementation (non-production)
// ============================================================================

/// Development mailer: logs the mail instead of delivering it
///
/// Returns a fake preview handle so downstream responses can surface one,
/// like an Ethereal test inbox would.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<MailReceipt, MailerError> {
        let message_id = uuid::Uuid::new_v4().to_string();

        tracing::info!(
            to = %mail.to,
            subject = %mail.subject,
            body_bytes = mail.html_body.len(),
            message_id = %message_id,
            "LogMailer: pretending to deliver email"
        );

        Ok(MailReceipt {
            preview_url: Some(format!("https://mail.preview.invalid/{}", message_id)),
            message_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail() -> OutgoingMail {
        OutgoingMail {
            to: "student@example.com".to_string(),
            subject: "Hello".to_string(),
            html_body: "<p>hi</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_log_mailer_returns_preview() {
        // Qualified call: both the Send and local variants of the trait are
        // in scope here
        let receipt = Mailer::send(&LogMailer, &mail()).await.unwrap();
        assert!(!receipt.message_id.is_empty());
        assert!(receipt.preview_url.is_some());
    }

    #[tokio::test]
    async fn test_send_best_effort_swallows_nothing_on_success() {
        let receipt = send_best_effort(&LogMailer, mail()).await;
        assert!(receipt.is_some());
    }

    struct FailingMailer;

    impl Mailer for FailingMailer {
        async fn send(&self, _mail: &OutgoingMail) -> Result<MailReceipt, MailerError> {
            Err(MailerError::Transport("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_send_best_effort_swallows_failure() {
        let receipt = send_best_effort(&FailingMailer, mail()).await;
        assert!(receipt.is_none());
    }
}
