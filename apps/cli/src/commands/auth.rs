//! # Auth Commands
//!
//! Sign-up, login, and logout.
//!
//! ## Sign-up Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sign-up Flow                                        │
//! │                                                                         │
//! │  prompt name, username, email, phone, password, confirmation            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_inputs(SignUp, form)                                          │
//! │       │                                                                 │
//! │       ├── invalid ──► per-field messages, NO network call               │
//! │       │                                                                 │
//! │       ▼ valid                                                           │
//! │  POST /users ──► "Registration successful" ──► shopper logs in          │
//! │                                                                         │
//! │  Validation always runs first: the backend accepts anything, so the    │
//! │  form rules are the only gate.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use shopfront_api::{Client, NewUser};
use shopfront_core::validation::{validate_inputs, FormFields, FormMode, FormValidation};

use crate::state::Session;

/// Interactive sign-up: prompt every field, validate, register.
pub async fn sign_up(client: &Client, editor: &mut DefaultEditor) -> Result<String> {
    debug!("signup command");

    let Some(form) = prompt_form(editor)? else {
        return Ok("Sign-up cancelled.".to_string());
    };

    let result = validate_inputs(FormMode::SignUp, &form);
    if !result.is_valid {
        return Ok(render_errors(&result));
    }

    let new_user = NewUser {
        name: form.name,
        username: form.username,
        email: form.email,
        phone: form.phone,
        password: form.password,
    };

    let created = client.users().register(&new_user).await?;
    Ok(format!(
        "Registration successful. Log in with `login {} <password>`.",
        created.username
    ))
}

/// Logs in with a username and password.
pub async fn login(
    client: &Client,
    session: &mut Session,
    username: &str,
    password: &str,
) -> Result<String> {
    debug!(%username, "login command");

    let form = FormFields {
        username: username.to_string(),
        password: password.to_string(),
        ..FormFields::default()
    };
    let result = validate_inputs(FormMode::Login, &form);
    if !result.is_valid {
        return Ok(render_errors(&result));
    }

    let user = client.users().login(username, password).await?;
    let name = user.name.clone();
    session.login(user.into());
    Ok(format!("Welcome, {}! You are now logged in.", name))
}

/// Logs out: clears the flag and the in-memory profile.
pub fn logout(session: &mut Session) -> String {
    debug!("logout command");

    if !session.is_logged_in() {
        return "You are not logged in.".to_string();
    }
    session.logout();
    "Logged out.".to_string()
}

// =============================================================================
// Helpers
// =============================================================================

/// Prompts for every sign-up field. `None` means the shopper hit Ctrl-C.
fn prompt_form(editor: &mut DefaultEditor) -> Result<Option<FormFields>> {
    let Some(name) = prompt(editor, "Name: ")? else {
        return Ok(None);
    };
    let Some(username) = prompt(editor, "Username: ")? else {
        return Ok(None);
    };
    let Some(email) = prompt(editor, "Email: ")? else {
        return Ok(None);
    };
    let Some(phone) = prompt(editor, "Phone: ")? else {
        return Ok(None);
    };
    let Some(password) = prompt(editor, "Password: ")? else {
        return Ok(None);
    };
    let Some(confirm_password) = prompt(editor, "Confirm password: ")? else {
        return Ok(None);
    };

    Ok(Some(FormFields {
        name,
        username,
        email,
        phone,
        password,
        confirm_password,
    }))
}

/// One prompt; `None` when the shopper cancels with Ctrl-C or Ctrl-D.
fn prompt(editor: &mut DefaultEditor, label: &str) -> Result<Option<String>> {
    match editor.readline(label) {
        Ok(value) => Ok(Some(value.trim_end().to_string())),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Renders the per-field messages of a failed validation.
fn render_errors(result: &FormValidation) -> String {
    let mut out = String::from("Please fix the following:");
    for (field, message) in result.errors.iter() {
        let _ = write!(out, "\n  {}: {}", field, message);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_errors_lists_each_field() {
        let result = validate_inputs(FormMode::SignUp, &FormFields::default());
        let out = render_errors(&result);

        assert!(out.contains("name: Name is required."));
        assert!(out.contains("phone: Phone number is required."));
        assert!(out.contains("password: Password is required."));
    }

    #[test]
    fn test_logout_when_not_logged_in() {
        let mut session = Session::init(None);
        let out = logout(&mut session);
        assert!(out.contains("not logged in"));
    }
}
