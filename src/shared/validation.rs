use std::borrow::Cow;
use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

use crate::shared::constants::{MAX_EMAIL_LENGTH, MAX_EMAIL_LOCAL_PART_LENGTH};

lazy_static! {
    /// Local part of an email address: dot-separated runs of RFC 5322 atom characters.
    /// - Valid: "john", "john.doe", "o'brien", "user+tag"
    /// - Invalid: ".john", "john.", "john..doe", "john doe"
    static ref EMAIL_LOCAL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
            .unwrap();

    /// Domain part of an email address: dot-separated hostname labels.
    /// - Valid: "example.com", "mail.example.co.id", "localhost"
    /// - Invalid: "", "example..com", "-example.com", "example.com."
    static ref EMAIL_DOMAIN_REGEX: Regex = Regex::new(
        r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$"
    )
    .unwrap();
}

/// Returns `true` when `value` is a well-formed `local@domain` address.
///
/// Consecutive dots are rejected on both sides of the `@`, as is anything
/// ending directly after the `@`.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > MAX_EMAIL_LOCAL_PART_LENGTH || domain.is_empty() {
        return false;
    }

    EMAIL_LOCAL_REGEX.is_match(local) && EMAIL_DOMAIN_REGEX.is_match(domain)
}

/// Required text field: rejects empty and whitespace-only values.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Required secret field. Whitespace counts as content for passwords.
pub fn validate_required_secret(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Required email field. An empty value only reports `required`.
pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if !is_valid_email(value.trim()) {
        return Err(ValidationError::new("email"));
    }
    Ok(())
}

/// Field name to human-readable failure reasons.
///
/// Ordered by field name so responses are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, reason: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(reason.into());
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[allow(dead_code)]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// All reasons flattened, in field order
    pub fn messages(&self) -> Vec<String> {
        self.0.values().flatten().cloned().collect()
    }

    /// `Ok(())` when no field failed, otherwise hands the errors back
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                out.add(field.as_ref(), reason_for(field.as_ref(), error));
            }
        }
        out
    }
}

/// Message for a single rule failure, unless the rule already carries one
fn reason_for(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let label = field.replace('_', " ");
    let code: &Cow<'static, str> = &error.code;
    match code.as_ref() {
        "required" => format!("The {} field is required.", label),
        "email" => format!("The {} field must be a valid email address.", label),
        "confirmed" => format!("The {} field confirmation does not match.", label),
        "unique" => format!("The {} has already been taken.", label),
        other => format!("The {} field is invalid ({}).", label, other),
    }
}

/// Builds the same reason text the derive rules produce, for checks done outside them
pub fn reason(field: &str, code: &'static str) -> String {
    reason_for(field, &ValidationError::new(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("user+tag@mail.example.co.id"));
        assert!(is_valid_email("o'brien@example.org"));
        assert!(is_valid_email("a@b.io"));
        assert!(is_valid_email("user@localhost"));
        assert!(is_valid_email("john@my-host.example.com"));
    }

    #[test]
    fn test_email_invalid() {
        assert!(!is_valid_email("")); // empty
        assert!(!is_valid_email("test@")); // nothing after @
        assert!(!is_valid_email("invalid..email@")); // double dot, no domain
        assert!(!is_valid_email("user..name@example.com")); // double dot in local part
        assert!(!is_valid_email("example..@email")); // double dot before @
        assert!(!is_valid_email("user@example..com")); // double dot in domain
        assert!(!is_valid_email("not-an-email")); // no @
        assert!(!is_valid_email("@example.com")); // no local part
        assert!(!is_valid_email("a@b@example.com")); // two @
        assert!(!is_valid_email(".user@example.com")); // leading dot
        assert!(!is_valid_email("user.@example.com")); // trailing dot
        assert!(!is_valid_email("user@example.com.")); // trailing dot in domain
        assert!(!is_valid_email("user@-example.com")); // label starts with hyphen
        assert!(!is_valid_email("user name@example.com")); // space
    }

    #[test]
    fn test_email_length_limits() {
        let local = "a".repeat(64);
        assert!(is_valid_email(&format!("{}@example.com", local)));

        let too_long_local = "a".repeat(65);
        assert!(!is_valid_email(&format!("{}@example.com", too_long_local)));

        let label = "b".repeat(60);
        let long_domain = format!("{label}.{label}.{label}.{label}.{label}.com");
        assert!(!is_valid_email(&format!("user@{}", long_domain)));
    }

    #[test]
    fn test_email_rule_reports_required_for_blank() {
        let err = validate_email_address("   ").unwrap_err();
        assert_eq!(err.code, "required");

        let err = validate_email_address("not-an-email").unwrap_err();
        assert_eq!(err.code, "email");

        assert!(validate_email_address(" john@example.com ").is_ok());
    }

    #[test]
    fn test_required_rules() {
        assert!(validate_required("").is_err());
        assert!(validate_required(" \t ").is_err());
        assert!(validate_required("John").is_ok());

        assert!(validate_required_secret("").is_err());
        assert!(validate_required_secret("   ").is_ok());
    }

    #[test]
    fn test_field_errors_collects_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("email", reason("email", "email"));
        errors.add("email", reason("email", "unique"));
        errors.add("password", reason("password", "confirmed"));

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("email").unwrap(),
            [
                "The email field must be a valid email address.".to_string(),
                "The email has already been taken.".to_string(),
            ]
        );
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["email", "password"]
        );
        assert_eq!(errors.messages().len(), 3);
        assert!(errors.into_result().is_err());
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_field_errors_serializes_as_map() {
        let mut errors = FieldErrors::new();
        errors.add("name", reason("name", "required"));

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": ["The name field is required."] })
        );
    }
}
