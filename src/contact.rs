//! `POST /api/contact`: checks the inquiry and relays it by email when a
//! relay is configured.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::{RelayConfig, SiteConfig};
use crate::intake::CONTACT_ENDPOINT;
use crate::markdown::escape_html;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Email relay failed: {0}")]
    Relay(String),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ContactError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            ContactError::Malformed(_) | ContactError::Relay(_) => {
                tracing::error!(error = %self, "Error processing contact form");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Request body as sent by the intake form. Everything is optional here so
/// a missing field becomes a 400 rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub project_type: Option<String>,
    pub timeline: Option<String>,
    pub budget_range: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    pub fn into_inquiry(self) -> Result<Inquiry, ContactError> {
        fn required(value: Option<String>) -> Result<String, ContactError> {
            value
                .filter(|v| !v.is_empty())
                .ok_or(ContactError::MissingFields)
        }

        Ok(Inquiry {
            name: required(self.name)?,
            email: required(self.email)?,
            company: self.company.filter(|c| !c.is_empty()),
            project_type: required(self.project_type)?,
            timeline: required(self.timeline)?,
            budget_range: required(self.budget_range)?,
            message: required(self.message)?,
        })
    }
}

/// An accepted inquiry.
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: String,
    pub timeline: String,
    pub budget_range: String,
    pub message: String,
}

impl Inquiry {
    pub fn subject(&self) -> String {
        format!("New Project Inquiry from {}", self.name)
    }

    /// Notification body. Every visitor-supplied value is escaped.
    pub fn html(&self) -> String {
        let line = |label: &str, value: &str| {
            format!("<p><strong>{label}:</strong> {}</p>\n", escape_html(value))
        };

        let mut html = String::from("<h2>New Project Inquiry</h2>\n");
        html.push_str(&line("Name", &self.name));
        html.push_str(&line("Email", &self.email));
        if let Some(company) = &self.company {
            html.push_str(&line("Company", company));
        }
        html.push_str(&line("Project Type", &self.project_type));
        html.push_str(&line("Timeline", &self.timeline));
        html.push_str(&line("Budget Range", &self.budget_range));
        html.push_str("<h3>Message:</h3>\n");
        html.push_str(&format!(
            "<p>{}</p>\n",
            escape_html(&self.message).replace('\n', "<br>")
        ));
        html
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<(), ContactError>;
}

/// Delivers inquiries through the Resend HTTP API.
pub struct ResendMailer {
    client: reqwest::Client,
    config: RelayConfig,
}

impl ResendMailer {
    pub fn new(config: RelayConfig) -> Result<Self, ContactError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ContactError::Relay(e.to_string()))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<(), ContactError> {
        let payload = json!({
            "from": self.config.from,
            "to": [self.config.to],
            "subject": inquiry.subject(),
            "html": inquiry.html(),
        });

        let response = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ContactError::Relay(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ContactError::Relay(format!("{status}: {detail}")));
        }
        tracing::info!(to = %self.config.to, "Inquiry relayed");
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct ContactState {
    /// `None` accepts inquiries without sending anything.
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl ContactState {
    pub fn from_config(config: &SiteConfig) -> Result<Self, ContactError> {
        let mailer = match &config.relay {
            Some(relay) => {
                Some(Arc::new(ResendMailer::new(relay.clone())?) as Arc<dyn Mailer>)
            }
            None => {
                tracing::warn!("RESEND_API_KEY or RESEND_TO_EMAIL unset, contact relay disabled");
                None
            }
        };
        Ok(Self { mailer })
    }
}

pub async fn submit_contact(
    State(state): State<ContactState>,
    body: Bytes,
) -> Result<Json<Value>, ContactError> {
    let request: ContactRequest = serde_json::from_slice(&body)?;
    let inquiry = request.into_inquiry()?;

    // best effort: a relay failure is logged, the visitor still sees success
    if let Some(mailer) = &state.mailer {
        if let Err(e) = mailer.deliver(&inquiry).await {
            tracing::error!(error = %e, "contact relay failed");
        }
    }

    Ok(Json(json!({ "success": true })))
}

pub fn router(state: ContactState) -> Router {
    Router::new()
        .route(CONTACT_ENDPOINT, post(submit_contact))
        .with_state(state)
}
