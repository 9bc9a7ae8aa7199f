//! HTTP API Client
//!
//! Functions for communicating with the portfolio server.

use gloo_net::http::Request;

use crate::widgets::{ContactDraft, SubmitOutcome};

/// Default API base: the server that served the page
pub const DEFAULT_API_BASE: &str = "/api";

const API_URL_KEY: &str = "portfolio_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ContactReply {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

// ============ API Functions ============

/// Submit the contact form.
///
/// Network failures and non-success replies both come back as
/// [`SubmitOutcome::Failed`]; the reason goes to the console.
pub async fn submit_contact(draft: &ContactDraft) -> SubmitOutcome {
    match post_contact(draft).await {
        Ok(outcome) => outcome,
        Err(e) => {
            web_sys::console::error_1(&e.into());
            SubmitOutcome::Failed
        }
    }
}

async fn post_contact(draft: &ContactDraft) -> Result<SubmitOutcome, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/contact", api_base))
        .json(draft)
        .map_err(|e| format!("Serialize error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let status_ok = response.ok();
    let reply: Option<ContactReply> = response.json().await.ok();

    if let Some(reply) = reply.as_ref().filter(|r| !r.success) {
        web_sys::console::warn_1(&format!("Contact rejected: {}", reply.message).into());
    }

    Ok(SubmitOutcome::from_reply(
        status_ok,
        reply.map(|r| r.success),
    ))
}
