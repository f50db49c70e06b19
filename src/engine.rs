//! Suggestion pipeline: decompose, match, rebuild

use crate::distance::Sift3;
use crate::matcher::find_closest;
use crate::parser::split_email;
use crate::types::{EmailParts, MatchConfig, Suggestion};
use tracing::debug;

/// Propose a corrected address for `email`, or `None` when the address is
/// already sound, unparseable, or not close to any known provider.
///
/// The input is lowercased before anything else; callers never need to
/// pre-normalize. Unparseable input flows through the matching passes with
/// empty parts and settles at `None` rather than an error.
#[must_use]
pub fn suggest(email: &str, config: &MatchConfig) -> Option<Suggestion> {
    let email = email.to_lowercase();
    let parts = split_email(&email).unwrap_or_else(|err| {
        debug!("address does not decompose: {err}");
        EmailParts::default()
    });

    match find_closest(
        &parts.domain,
        &config.domains,
        config.metric.as_ref(),
        config.threshold,
    ) {
        // Already one of the known providers.
        Some(closest) if closest == parts.domain => return None,
        Some(closest) => {
            debug!("domain {} resembles {closest}", parts.domain);
            return Some(Suggestion::new(parts.local_part, closest));
        }
        None => {}
    }

    // The whole domain matched nothing; see whether the suffix alone was
    // mistyped. This pass always scores with Sift3, whatever metric the
    // caller configured.
    let closest_tld = find_closest(
        &parts.top_level_domain,
        &config.top_level_domains,
        &Sift3,
        config.threshold,
    )?;
    if parts.domain.is_empty() || closest_tld == parts.top_level_domain {
        return None;
    }

    let stem = parts.domain.rfind(&parts.top_level_domain)?;
    let domain = format!("{}{closest_tld}", &parts.domain[..stem]);
    debug!(
        "top-level domain {} resembles {closest_tld}",
        parts.top_level_domain
    );
    Some(Suggestion::new(parts.local_part, domain))
}
