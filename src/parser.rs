//! Address decomposition

use crate::error::{ParseError, Result};
use crate::types::EmailParts;

/// Split a raw address into local part, domain, and top-level domain.
///
/// Only the final `@` separates the local part from the domain; earlier `@`
/// characters stay in the local part verbatim. The top-level domain is
/// everything past the domain's first label, or the whole domain when it is
/// a bare label (valid under RFC).
pub fn split_email(email: &str) -> Result<EmailParts> {
    let segments: Vec<&str> = email.split('@').collect();

    if segments.len() < 2 {
        return Err(ParseError::MissingSeparator);
    }
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(ParseError::EmptySegment);
    }

    let Some((&domain, local_segments)) = segments.split_last() else {
        return Err(ParseError::MissingSeparator);
    };
    let local_part = local_segments.join("@");

    let labels: Vec<&str> = domain.split('.').collect();
    let top_level_domain = match labels.as_slice() {
        // Unreachable while the empty-segment check holds; kept as a typed
        // dead end rather than a panic path.
        [] => return Err(ParseError::EmptySegment),
        [label] => (*label).to_string(),
        [_, rest @ ..] => rest.join("."),
    };

    Ok(EmailParts {
        local_part,
        domain: domain.to_string(),
        top_level_domain,
    })
}
