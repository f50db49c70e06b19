//! Core types for address suggestion

use crate::distance::{DistanceMetric, Sift3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest distance still accepted as a near miss when no explicit
/// threshold is configured.
pub const DEFAULT_THRESHOLD: f64 = 3.0;

/// Structural pieces of an address, split around the final `@`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailParts {
    /// Everything before the final `@`, embedded `@` characters intact
    pub local_part: String,

    /// The last `@`-delimited segment
    pub domain: String,

    /// The domain past its first label, or the whole domain when it has
    /// only one label
    pub top_level_domain: String,
}

/// A proposed correction for a mistyped address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    /// Local part carried over from the input
    pub local_part: String,

    /// Corrected domain
    pub domain: String,

    /// Rebuilt address, `local_part@domain`
    pub full_address: String,
}

impl Suggestion {
    /// Assemble a suggestion from a local part and a corrected domain
    #[must_use]
    pub fn new(local_part: impl Into<String>, domain: impl Into<String>) -> Self {
        let local_part = local_part.into();
        let domain = domain.into();
        let full_address = format!("{local_part}@{domain}");
        Self {
            local_part,
            domain,
            full_address,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_address)
    }
}

/// Matching configuration supplied to [`suggest`](crate::suggest)
///
/// `Default` carries the stock reference lists, a threshold of
/// [`DEFAULT_THRESHOLD`], and the [`Sift3`] metric.
pub struct MatchConfig {
    /// Reference domains scanned during the domain pass, in match-priority
    /// order
    pub domains: Vec<String>,

    /// Reference suffixes scanned during the top-level-domain pass
    pub top_level_domains: Vec<String>,

    /// Largest distance still accepted as a near miss
    pub threshold: f64,

    /// Metric scoring the domain pass
    pub metric: Box<dyn DistanceMetric + Send + Sync>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            domains: default_domains(),
            top_level_domains: default_top_level_domains(),
            threshold: DEFAULT_THRESHOLD,
            metric: Box::new(Sift3),
        }
    }
}

impl fmt::Debug for MatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchConfig")
            .field("domains", &self.domains)
            .field("top_level_domains", &self.top_level_domains)
            .field("threshold", &self.threshold)
            .field("metric", &self.metric.name())
            .finish()
    }
}

/// Mailbox providers consulted when no explicit domain list is supplied
#[must_use]
pub fn default_domains() -> Vec<String> {
    [
        "yahoo.com",
        "google.com",
        "hotmail.com",
        "gmail.com",
        "me.com",
        "aol.com",
        "mac.com",
        "live.com",
        "comcast.net",
        "googlemail.com",
        "msn.com",
        "hotmail.co.uk",
        "yahoo.co.uk",
        "facebook.com",
        "verizon.net",
        "sbcglobal.net",
        "att.net",
        "gmx.com",
        "mail.com",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Common suffixes consulted when no explicit top-level-domain list is
/// supplied
#[must_use]
pub fn default_top_level_domains() -> Vec<String> {
    ["co.uk", "com", "net", "org", "info", "edu", "gov", "mil"]
        .into_iter()
        .map(String::from)
        .collect()
}
