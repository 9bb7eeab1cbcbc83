use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::form_backend::SubmitError;

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A validation message. `field` is `None` for form-level errors.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

impl FieldError {
    pub fn for_field(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.to_string()),
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

/// Edits to the in-progress form.
pub enum DraftAction {
    Set(Field, String),
    Clear,
}

impl Reducible for ContactSubmission {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DraftAction::Set(field, value) => {
                let slot = match field {
                    Field::Name => &mut next.name,
                    Field::Email => &mut next.email,
                    Field::Phone => &mut next.phone,
                    Field::Message => &mut next.message,
                };
                *slot = value;
            }
            DraftAction::Clear => next = ContactSubmission::default(),
        }
        Rc::new(next)
    }
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        let required = [
            (Field::Name, &self.name, "Please enter your name"),
            (Field::Email, &self.email, "Please enter your email"),
            (Field::Phone, &self.phone, "Please enter a phone number"),
            (Field::Message, &self.message, "Tell us how we can help"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.push(FieldError::for_field(field.key(), message));
            }
        }
        if !self.email.trim().is_empty() && !looks_like_email(self.email.trim()) {
            errors.push(FieldError::for_field(
                Field::Email.key(),
                "Please enter a valid email address",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Idle,
    Sending,
    Success,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub status: FormStatus,
    pub errors: Vec<FieldError>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            status: FormStatus::Idle,
            errors: Vec::new(),
        }
    }
}

pub enum FormAction {
    Submit,
    Invalid(Vec<FieldError>),
    Accepted,
    Rejected(Vec<FieldError>),
    Failed(String),
    Reset,
}

/// Client-side gate: only a complete submission may start sending.
pub fn submit_action(submission: &ContactSubmission) -> FormAction {
    match submission.validate() {
        Ok(()) => FormAction::Submit,
        Err(errors) => FormAction::Invalid(errors),
    }
}

impl From<Result<(), SubmitError>> for FormAction {
    fn from(result: Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => FormAction::Accepted,
            Err(SubmitError::Rejected(errors)) => FormAction::Rejected(errors),
            Err(e) => FormAction::Failed(e.to_string()),
        }
    }
}

impl FormState {
    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    pub fn errors_for(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field.key()))
    }

    pub fn form_errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(|e| e.field.is_none())
    }

    pub fn apply(&self, action: FormAction) -> FormState {
        use FormStatus::*;
        match (action, &self.status) {
            (FormAction::Submit, Idle | Failed(_)) => FormState {
                status: Sending,
                errors: Vec::new(),
            },
            (FormAction::Invalid(errors), Idle | Failed(_)) => FormState {
                status: Idle,
                errors,
            },
            (FormAction::Accepted, Sending) => FormState {
                status: Success,
                errors: Vec::new(),
            },
            (FormAction::Rejected(errors), Sending) => FormState {
                status: Idle,
                errors,
            },
            (FormAction::Failed(message), Sending) => FormState {
                status: Failed(message),
                errors: Vec::new(),
            },
            (FormAction::Reset, Success | Failed(_)) => FormState::default(),
            _ => self.clone(),
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactSubmission {
        ContactSubmission {
            name: "Regina C".into(),
            email: "regina@example.com".into(),
            phone: "317-555-0100".into(),
            message: "Looking for companion care for my mother.".into(),
        }
    }

    #[test]
    fn complete_submission_is_valid() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_all_reported() {
        let submission = ContactSubmission {
            name: "   ".into(),
            phone: String::new(),
            ..complete()
        };
        let errors = submission.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().filter_map(|e| e.field.as_deref()).collect();
        assert_eq!(fields, vec!["name", "phone"]);
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["regina", "regina@", "@example.com", "regina@example", "a b@example.com", "a@b@c.com", "a@example.", "a@b..com", "a@.example.com"] {
            let submission = ContactSubmission {
                email: email.into(),
                ..complete()
            };
            assert!(submission.validate().is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn multi_label_domains_are_accepted() {
        let submission = ContactSubmission {
            email: "care@mail.example.co.uk".into(),
            ..complete()
        };
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn draft_edits_one_field_at_a_time() {
        let draft = Rc::new(ContactSubmission::default());
        let draft = draft.reduce(DraftAction::Set(Field::Email, "regina@example.com".into()));
        let draft = draft.reduce(DraftAction::Set(Field::Name, "Regina".into()));
        assert_eq!(draft.email, "regina@example.com");
        assert_eq!(draft.name, "Regina");
        assert!(draft.phone.is_empty());

        let cleared = draft.reduce(DraftAction::Clear);
        assert_eq!(*cleared, ContactSubmission::default());
    }

    #[test]
    fn successful_submission_flow() {
        let state = FormState::default();
        let state = state.apply(submit_action(&complete()));
        assert_eq!(state.status, FormStatus::Sending);
        let state = state.apply(FormAction::from(Ok(())));
        assert_eq!(state.status, FormStatus::Success);
        let state = state.apply(FormAction::Reset);
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn missing_field_never_reaches_sending() {
        let incomplete = ContactSubmission {
            message: String::new(),
            ..complete()
        };
        let state = FormState::default().apply(submit_action(&incomplete));
        assert_eq!(state.status, FormStatus::Idle);
        assert_eq!(state.errors_for(Field::Message).count(), 1);
    }

    #[test]
    fn rejection_returns_to_idle_with_field_errors() {
        let sending = FormState::default().apply(FormAction::Submit);
        let rejected = sending.apply(FormAction::from(Err(SubmitError::Rejected(vec![
            FieldError::for_field("email", "should be an email"),
            FieldError {
                field: None,
                message: "Form is disabled".into(),
            },
        ]))));
        assert_eq!(rejected.status, FormStatus::Idle);
        assert_eq!(rejected.errors_for(Field::Email).count(), 1);
        assert_eq!(rejected.form_errors().count(), 1);

        let retried = rejected.apply(FormAction::Submit);
        assert_eq!(retried.status, FormStatus::Sending);
        assert!(retried.errors.is_empty());
    }

    #[test]
    fn network_failure_can_be_retried() {
        let failed = FormState::default()
            .apply(FormAction::Submit)
            .apply(FormAction::from(Err(SubmitError::Network("offline".into()))));
        assert!(matches!(failed.status, FormStatus::Failed(_)));
        assert_eq!(failed.apply(FormAction::Submit).status, FormStatus::Sending);
    }

    #[test]
    fn stray_transitions_are_ignored() {
        let idle = FormState::default();
        assert_eq!(idle.apply(FormAction::Accepted), idle);
        assert_eq!(idle.apply(FormAction::Reset), idle);

        let sending = idle.apply(FormAction::Submit);
        assert_eq!(sending.apply(FormAction::Submit), sending);
        assert_eq!(sending.apply(FormAction::Reset), sending);

        let success = sending.apply(FormAction::Accepted);
        assert_eq!(success.apply(FormAction::Submit), success);
    }
}
