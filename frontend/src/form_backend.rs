use gloo_net::http::Request;
use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::contact::{ContactSubmission, FieldError};

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("The contact form is not configured yet. Please call or email us instead.")]
    NotConfigured,
    #[error("Please correct the highlighted fields.")]
    Rejected(Vec<FieldError>),
    #[error("We couldn't send your request ({0}). Please check your connection and try again.")]
    Network(String),
    #[error("Something went wrong on our side (status {0}). Please try again.")]
    Unexpected(u16),
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<FieldError>,
    #[serde(default)]
    error: Option<String>,
}

/// Maps a form service response onto the submission outcome.
pub fn interpret_response(status: u16, body: &str) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    if (400..500).contains(&status) {
        if let Ok(response) = serde_json::from_str::<ErrorResponse>(body) {
            let mut errors = response.errors;
            if let Some(message) = response.error {
                if errors.is_empty() {
                    errors.push(FieldError {
                        field: None,
                        message,
                    });
                }
            }
            if !errors.is_empty() {
                return Err(SubmitError::Rejected(errors));
            }
        }
    }
    Err(SubmitError::Unexpected(status))
}

pub async fn submit_contact(
    endpoint: Option<&str>,
    submission: &ContactSubmission,
) -> Result<(), SubmitError> {
    let endpoint = endpoint.ok_or(SubmitError::NotConfigured)?;
    debug!("Posting contact request to {}", endpoint);

    let request = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(submission)
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let response = request.send().await.map_err(|e| {
        warn!("Contact request failed before a response: {}", e);
        SubmitError::Network(e.to_string())
    })?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let outcome = interpret_response(status, &body);
    if let Err(e) = &outcome {
        warn!("Contact request not accepted: {:?}", e);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_are_accepted() {
        assert_eq!(interpret_response(200, r#"{"next":"/thanks","ok":true}"#), Ok(()));
        assert_eq!(interpret_response(204, ""), Ok(()));
    }

    #[test]
    fn field_errors_are_surfaced() {
        let body = r#"{"errors":[{"field":"email","code":"TYPE_EMAIL","message":"should be an email"}]}"#;
        assert_eq!(
            interpret_response(422, body),
            Err(SubmitError::Rejected(vec![FieldError::for_field(
                "email",
                "should be an email"
            )]))
        );
    }

    #[test]
    fn form_level_error_has_no_field() {
        let body = r#"{"error":"This form has been disabled"}"#;
        match interpret_response(403, body) {
            Err(SubmitError::Rejected(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, None);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn unparseable_or_server_errors_are_unexpected() {
        assert_eq!(interpret_response(400, "<html>"), Err(SubmitError::Unexpected(400)));
        assert_eq!(interpret_response(422, "{}"), Err(SubmitError::Unexpected(422)));
        assert_eq!(interpret_response(502, r#"{"errors":[]}"#), Err(SubmitError::Unexpected(502)));
    }
}
