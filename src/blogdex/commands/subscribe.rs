use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BlogdexError, Result};
use tracing::info;

/// Accepts a newsletter sign-up.
///
/// Only the shape of the address is checked; delivery belongs to whatever
/// mailing service the caller wires in.
pub fn run(email: &str) -> Result<CmdResult> {
    let email = email.trim();
    validate_email(email)?;

    info!(email, "newsletter subscription");
    Ok(CmdResult::default()
        .with_subscribed(email)
        .with_message(CmdMessage::success(format!(
            "Thanks for subscribing! You'll receive our weekly tips at {}",
            email
        ))))
}

fn validate_email(email: &str) -> Result<()> {
    let invalid = || BlogdexError::InvalidEmail(email.to_string());

    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    Ok(())
}
