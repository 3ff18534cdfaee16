// SPDX-License-Identifier: PMPL-1.0-or-later

//! Contact form: field validation, simulated submission, receipt.

use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Company, Field::Message]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Field::Name => "contact.name",
            Field::Email => "contact.email",
            Field::Company => "contact.company",
            Field::Message => "contact.message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Company)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message_key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub reference: String,
    /// Sender name, for the thank-you message.
    pub name: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Invalid { errors: Vec<FieldError> },
    Sent { receipt: Receipt },
    Failed,
}

/// A validated message as handed to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

pub trait Submitter {
    fn submit(&self, message: &ContactMessage) -> Result<()>;
}

/// Stand-in backend: waits, then succeeds or fails as configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSubmitter {
    pub delay: Duration,
    pub fail: bool,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, message: &ContactMessage) -> Result<()> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        if self.fail {
            bail!("simulated delivery failure for {}", message.email);
        }
        Ok(())
    }
}

fn email_shape() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_shape().is_match(value.trim())
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    company: String,
    message: String,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    /// Update a field. Any error shown for that field is cleared.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
        if let FormStatus::Invalid { errors } = &mut self.status {
            errors.retain(|e| e.field != field);
            if errors.is_empty() {
                self.status = FormStatus::Idle;
            }
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        match &self.status {
            FormStatus::Invalid { errors } => errors.iter().find(|e| e.field == field),
            _ => None,
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for &field in Field::all() {
            let value = self.value(field).trim();
            if field.is_required() && value.is_empty() {
                errors.push(FieldError {
                    field,
                    message_key: "contact.error.required",
                });
            } else if field == Field::Email && !is_valid_email(value) {
                errors.push(FieldError {
                    field,
                    message_key: "contact.error.email",
                });
            }
        }
        errors
    }

    /// Validate and, if clean, hand the message to `submitter`.
    ///
    /// Invalid input never reaches the submitter. A successful send resets
    /// the fields.
    pub fn submit(&mut self, submitter: &dyn Submitter) -> &FormStatus {
        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "contact form blocked by validation");
            self.status = FormStatus::Invalid { errors };
            return &self.status;
        }

        let message = ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: Some(self.company.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            message: self.message.trim().to_string(),
        };
        self.status = match submitter.submit(&message).and_then(|()| new_receipt(&message.name)) {
            Ok(receipt) => {
                tracing::info!(reference = %receipt.reference, "contact message sent");
                self.name.clear();
                self.email.clear();
                self.company.clear();
                self.message.clear();
                FormStatus::Sent { receipt }
            }
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "contact submission failed");
                FormStatus::Failed
            }
        };
        &self.status
    }
}

fn new_receipt(name: &str) -> Result<Receipt> {
    let mut bytes = [0u8; 4];
    getrandom::getrandom(&mut bytes).map_err(|err| anyhow!("no entropy for receipt: {err}"))?;
    Ok(Receipt {
        reference: format!("ATL-{}", hex::encode_upper(bytes)),
        name: name.to_string(),
        submitted_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingSubmitter {
        calls: Cell<usize>,
    }

    impl Submitter for CountingSubmitter {
        fn submit(&self, _message: &ContactMessage) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Sara Ahmadi");
        form.set(Field::Email, "sara@example.com");
        form.set(Field::Message, "Please send the annual report.");
        form
    }

    #[test]
    fn email_needs_local_part_domain_and_dot() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
    }

    #[test]
    fn empty_form_reports_required_fields_only() {
        let form = ContactForm::new();
        let fields: Vec<Field> = form.validate().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn invalid_email_blocks_then_correction_succeeds() {
        let submitter = CountingSubmitter { calls: Cell::new(0) };
        let mut form = filled();
        form.set(Field::Email, "not-an-email");

        let status = form.submit(&submitter).clone();
        assert_eq!(
            status,
            FormStatus::Invalid {
                errors: vec![FieldError {
                    field: Field::Email,
                    message_key: "contact.error.email"
                }]
            }
        );
        assert_eq!(submitter.calls.get(), 0);
        assert!(form.error_for(Field::Email).is_some());

        form.set(Field::Email, "sara@example.com");
        assert!(form.error_for(Field::Email).is_none());
        let FormStatus::Sent { receipt } = form.submit(&submitter) else {
            panic!("corrected form should send");
        };
        assert!(receipt.reference.starts_with("ATL-"));
        assert_eq!(receipt.reference.len(), 12);
        assert_eq!(receipt.name, "Sara Ahmadi");
        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(form.value(Field::Name), "");
    }

    #[test]
    fn failed_submission_keeps_fields() {
        let mut form = filled();
        let status = form.submit(&SimulatedSubmitter::failing(Duration::ZERO));
        assert_eq!(status, &FormStatus::Failed);
        assert_eq!(form.value(Field::Email), "sara@example.com");
    }

    #[test]
    fn simulated_submitter_waits() {
        let mut form = filled();
        let started = std::time::Instant::now();
        form.submit(&SimulatedSubmitter::new(Duration::from_millis(20)));
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert!(matches!(form.status(), FormStatus::Sent { .. }));
    }
}
