//! Contact form model and validation

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [FormField::Name, FormField::Email, FormField::Subject, FormField::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "your_name",
            FormField::Email => "user@network.com",
            FormField::Subject => "transmission_subject",
            FormField::Message => "enter_message...",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Subject)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(FormField),

    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First problem found, in field order
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in FormField::ALL.into_iter().filter(FormField::is_required) {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::Missing(field));
            }
        }

        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(user, host)| !user.is_empty() && !host.is_empty() && !host.contains('@'));
        if !valid_email {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(FormField::Name, "Ada");
        form.set(FormField::Email, "ada@example.com");
        form.set(FormField::Message, "hello");
        form
    }

    #[test]
    fn test_subject_is_optional() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields_in_order() {
        assert_eq!(
            ContactForm::default().validate(),
            Err(ValidationError::Missing(FormField::Name))
        );

        let mut form = filled();
        form.set(FormField::Message, "   ");
        assert_eq!(form.validate(), Err(ValidationError::Missing(FormField::Message)));
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ada", "@example.com", "ada@", "a@b@c"] {
            let mut form = filled();
            form.set(FormField::Email, bad);
            assert!(matches!(form.validate(), Err(ValidationError::InvalidEmail(_))), "{}", bad);
        }
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("EMAIL".parse::<FormField>(), Ok(FormField::Email));
        assert!("phone".parse::<FormField>().is_err());
    }
}
