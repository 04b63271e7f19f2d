//! # Validation Module
//!
//! Form input validation for the sign-up and login flows.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Field rules (this module)                                    │
//! │  ├── validate_email     Gmail-only business rule                       │
//! │  ├── validate_phone     10 digits, leading zero                        │
//! │  └── validate_password  length + character classes                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Form aggregation (this module)                               │
//! │  └── validate_inputs    required checks + field rules → error map      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                       │
//! │  └── The mock backend accepts whatever it is sent; these rules are     │
//! │      the only gate, so they run before every network call.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No side effects and no panics: every failure is communicated through the
//! returned error map, and every error is recoverable by user correction.

use serde::{Deserialize, Serialize};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an email address against the Gmail-only rule.
///
/// ## Rules
/// - Empty input returns `None` (the form has not been filled yet)
/// - Otherwise `Some(true)` iff the address is `local@gmail.com` where
///   `local` is one or more word characters, dots, or hyphens
///
/// This is a deliberate, narrow business rule - NOT a general email check.
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_email;
///
/// assert_eq!(validate_email("x@gmail.com"), Some(true));
/// assert_eq!(validate_email("x@yahoo.com"), Some(false));
/// assert_eq!(validate_email(""), None);
/// ```
pub fn validate_email(email: &str) -> Option<bool> {
    if email.is_empty() {
        return None;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Some(false);
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-');

    Some(local_ok && domain == "gmail.com")
}

/// Validates a phone number.
///
/// ## Rules
/// - Exactly 10 ASCII digits
/// - Must start with `0`
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_phone;
///
/// assert!(validate_phone("0123456789"));
/// assert!(!validate_phone("123456789")); // 9 digits, no leading zero
/// ```
pub fn validate_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.starts_with('0') && phone.chars().all(|c| c.is_ascii_digit())
}

/// Validates a password.
///
/// ## Rules
/// - At least 8 characters
/// - At least one ASCII letter
/// - At least one ASCII digit
/// - At least one special character (anything that is not an ASCII letter
///   or digit; underscore counts as special)
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_password;
///
/// assert!(validate_password("abc12345!"));
/// assert!(!validate_password("abcdefgh")); // no digit, no special char
/// ```
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

// =============================================================================
// Form Aggregation
// =============================================================================

/// Which form is being validated.
///
/// Sign-up checks every field; login checks only username and password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    SignUp,
    Login,
}

/// Raw form field values, exactly as typed.
///
/// Lifetime is one form session; nothing here is persisted. The phone
/// number stays a string so the leading zero survives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Per-field error messages. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl ValidationErrors {
    /// Iterates over the fields that have a message, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("name", &self.name),
            ("username", &self.username),
            ("email", &self.email),
            ("phone", &self.phone),
            ("password", &self.password),
            ("confirm password", &self.confirm_password),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.as_deref().map(|m| (field, m)))
    }
}

/// The aggregate result of validating a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormValidation {
    /// True iff no field produced an error message.
    pub is_valid: bool,
    /// The per-field messages for display next to each input.
    pub errors: ValidationErrors,
}

/// Aggregates per-field required/format checks into a single result.
///
/// ## Sign-up mode
/// All fields are checked and the password confirmation must match.
///
/// ## Login mode
/// Only username presence and password presence/format are checked; a
/// wrong-format password fails fast as "Incorrect password" before any
/// network call.
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::{validate_inputs, FormFields, FormMode};
///
/// let form = FormFields::default();
/// let result = validate_inputs(FormMode::SignUp, &form);
/// assert!(!result.is_valid);
/// assert!(result.errors.name.is_some());
/// ```
pub fn validate_inputs(mode: FormMode, fields: &FormFields) -> FormValidation {
    let mut errors = ValidationErrors::default();

    match mode {
        FormMode::SignUp => {
            if fields.name.is_empty() {
                errors.name = Some("Name is required.".to_string());
            }
            if fields.username.trim().is_empty() {
                errors.username = Some("Username is required.".to_string());
            }
            if fields.email.trim().is_empty() {
                errors.email = Some("Email is required.".to_string());
            } else if validate_email(&fields.email) != Some(true) {
                errors.email = Some("Email must be a Gmail address.".to_string());
            }
            if fields.phone.is_empty() {
                errors.phone = Some("Phone number is required.".to_string());
            } else if !validate_phone(&fields.phone) {
                errors.phone =
                    Some("Phone number must start with 0 and have exactly 10 digits.".to_string());
            }
            if fields.password.is_empty() {
                errors.password = Some("Password is required.".to_string());
            } else if !validate_password(&fields.password) {
                errors.password = Some(
                    "Password must be at least 8 characters long and include letters, numbers, and special characters."
                        .to_string(),
                );
            }
            if fields.password != fields.confirm_password {
                errors.confirm_password = Some("Passwords do not match.".to_string());
            }
        }
        FormMode::Login => {
            if fields.username.trim().is_empty() {
                errors.username = Some("Username is required.".to_string());
            }
            if fields.password.is_empty() {
                errors.password = Some("Password is required.".to_string());
            } else if !validate_password(&fields.password) {
                errors.password = Some("Incorrect password".to_string());
            }
        }
    }

    let is_valid = errors == ValidationErrors::default();
    FormValidation { is_valid, errors }
}

// =============================================================================
// Unit Tests
// =============================================================================
