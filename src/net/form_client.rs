//! Contact form submission to the third-party form backend.
//!
//! One `POST` per attempt, multipart body, `Accept: application/json`. A 2xx
//! is success and its body is ignored; anything else is parsed for field
//! errors.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is terminal for the attempt and reported as a `FormError`;
//! nothing is retried. The optional timeout only applies when configured.

#[cfg(test)]
#[path = "form_client_test.rs"]
mod form_client_test;

use std::future::Future;
use std::time::Duration;

use futures::future::{Either, select};

use super::types::{ContactFields, ServerErrorBody};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("network error: {0}")]
    Network(String),
    #[error("submission rejected: {}", .0.join(", "))]
    Rejected(Vec<String>),
    #[error("malformed server response: {0}")]
    MalformedResponse(String),
    #[error("request timed out")]
    Timeout,
}

/// Interpret a non-2xx response body.
#[must_use]
pub fn classify_rejection(status: u16, body: &str) -> FormError {
    match serde_json::from_str::<ServerErrorBody>(body) {
        Ok(parsed) => FormError::Rejected(parsed.messages()),
        Err(err) => FormError::MalformedResponse(format!("status {status}: {err}")),
    }
}

/// Resolve `work`, or fail with [`FormError::Timeout`] if `deadline` resolves
/// first.
///
/// # Errors
///
/// Returns the error from `work`, or `Timeout`.
pub async fn race_deadline<T, W, D>(work: W, deadline: D) -> Result<T, FormError>
where
    W: Future<Output = Result<T, FormError>>,
    D: Future<Output = ()>,
{
    match select(Box::pin(work), Box::pin(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FormError::Timeout),
    }
}

/// Submit `fields` to `endpoint`.
///
/// # Errors
///
/// Returns a `FormError` for transport failures, non-2xx responses, and
/// timeouts.
pub async fn submit_contact(endpoint: &str, fields: &ContactFields, timeout: Option<Duration>) -> Result<(), FormError> {
    match timeout {
        None => post_once(endpoint, fields).await,
        Some(limit) => race_deadline(post_once(endpoint, fields), gloo_timers::future::sleep(limit)).await,
    }
}

async fn post_once(endpoint: &str, fields: &ContactFields) -> Result<(), FormError> {
    let body = web_sys::FormData::new().map_err(|e| FormError::Network(format!("{e:?}")))?;
    for (name, value) in fields.entries() {
        body.append_with_str(name, value)
            .map_err(|e| FormError::Network(format!("{e:?}")))?;
    }

    let resp = gloo_net::http::Request::post(endpoint)
        .header("Accept", "application/json")
        .body(body)
        .map_err(|e| FormError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FormError::Network(e.to_string()))?;

    let status = resp.status();
    if (200..300).contains(&status) {
        log::info!("contact form accepted: status={status}");
        return Ok(());
    }

    let text = resp
        .text()
        .await
        .map_err(|e| FormError::MalformedResponse(e.to_string()))?;
    let err = classify_rejection(status, &text);
    log::warn!("contact form rejected: status={status} err={err}");
    Err(err)
}
