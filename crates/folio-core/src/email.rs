//! Transactional email client for the contact form.
//!
//! Speaks the EmailJS REST API: one request delivers the visitor's message
//! to the site owner, and an optional second request sends the visitor an
//! auto-reply. The auto-reply is only attempted after the first request
//! succeeds.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use crate::config::EmailConfig;
use crate::contact::ContactMessage;

const SEND_PATH: &str = "/api/v1.0/email/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_SERVICE_ID: &str = "FOLIO_EMAIL_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "FOLIO_EMAIL_TEMPLATE_ID";
pub const ENV_AUTO_REPLY_TEMPLATE_ID: &str = "FOLIO_EMAIL_AUTO_REPLY_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "FOLIO_EMAIL_PUBLIC_KEY";

/// Which request of a submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Notification,
    AutoReply,
}

impl fmt::Display for SubmitPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitPhase::Notification => write!(f, "notification"),
            SubmitPhase::AutoReply => write!(f, "auto-reply"),
        }
    }
}

/// Why a submission failed. Always recoverable: the form is kept for retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A required credential is missing from config and environment.
    NotConfigured { missing: &'static str },
    /// The API answered with a non-success status.
    Rejected {
        phase: SubmitPhase,
        status: u16,
        body: String,
    },
    /// The request never got an answer.
    Transport { phase: SubmitPhase, message: String },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NotConfigured { missing } => {
                write!(f, "Email delivery is not configured (missing {missing})")
            }
            SubmitError::Rejected {
                phase,
                status,
                body,
            } => write!(f, "{phase} request rejected with status {status}: {body}"),
            SubmitError::Transport { phase, message } => {
                write!(f, "{phase} request failed: {message}")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// Resolved credentials for the email API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub auto_reply_template_id: Option<String>,
    pub public_key: String,
}

impl EmailSettings {
    /// Resolves settings from config, letting environment variables win.
    ///
    /// # Errors
    /// Returns [`SubmitError::NotConfigured`] naming the first missing
    /// credential.
    pub fn resolve(config: &EmailConfig) -> Result<Self, SubmitError> {
        Self::resolve_with(config, |key| std::env::var(key).ok())
    }

    /// Like [`resolve`](Self::resolve) with an explicit environment lookup.
    ///
    /// # Errors
    /// Returns [`SubmitError::NotConfigured`] naming the first missing
    /// credential.
    pub fn resolve_with(
        config: &EmailConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SubmitError> {
        let pick = |key: &str, configured: &Option<String>| {
            env(key)
                .or_else(|| configured.clone())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let service_id = pick(ENV_SERVICE_ID, &config.service_id).ok_or(
            SubmitError::NotConfigured {
                missing: "service_id",
            },
        )?;
        let template_id = pick(ENV_TEMPLATE_ID, &config.template_id).ok_or(
            SubmitError::NotConfigured {
                missing: "template_id",
            },
        )?;
        let public_key = pick(ENV_PUBLIC_KEY, &config.public_key).ok_or(
            SubmitError::NotConfigured {
                missing: "public_key",
            },
        )?;
        let auto_reply_template_id =
            pick(ENV_AUTO_REPLY_TEMPLATE_ID, &config.auto_reply_template_id);

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_id,
            template_id,
            auto_reply_template_id,
            public_key,
        })
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct EmailClient {
    http: reqwest::Client,
    settings: EmailSettings,
}

impl EmailClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(settings: EmailSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, settings })
    }

    /// Sends the contact notification, then the auto-reply if configured.
    ///
    /// # Errors
    /// Returns the first failing request's error; the auto-reply is not
    /// attempted if the notification fails.
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        self.send(
            SubmitPhase::Notification,
            &self.settings.template_id,
            json!({
                "name": message.name,
                "email": message.email,
                "message": message.message,
            }),
        )
        .await?;

        if let Some(template_id) = &self.settings.auto_reply_template_id {
            self.send(
                SubmitPhase::AutoReply,
                template_id,
                json!({
                    "name": message.name,
                    "email": message.email,
                }),
            )
            .await?;
        }

        info!("Contact message delivered");
        Ok(())
    }

    async fn send(
        &self,
        phase: SubmitPhase,
        template_id: &str,
        template_params: serde_json::Value,
    ) -> Result<(), SubmitError> {
        let url = format!("{}{SEND_PATH}", self.settings.base_url);
        let body = SendRequest {
            service_id: &self.settings.service_id,
            template_id,
            user_id: &self.settings.public_key,
            template_params,
        };

        debug!(%phase, template_id, "Sending email request");
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| SubmitError::Transport {
                phase,
                message: err.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::Rejected {
            phase,
            status: status.as_u16(),
            body,
        })
    }
}
