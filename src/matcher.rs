//! Nearest-match scanning over a reference list

use crate::distance::{DISSIMILAR, DistanceMetric};

/// Find the entry of `references` closest to `candidate` under `metric`.
///
/// A verbatim hit wins immediately no matter where it sits in the list.
/// Otherwise every entry is scored and the first entry achieving the
/// minimum distance is kept; it is returned only when that minimum is
/// within `threshold` (inclusive). The scan is seeded at [`DISSIMILAR`],
/// so entries scoring the sentinel or worse never become the best match.
#[must_use]
pub fn find_closest<'a>(
    candidate: &str,
    references: &'a [String],
    metric: &dyn DistanceMetric,
    threshold: f64,
) -> Option<&'a str> {
    if candidate.is_empty() || references.is_empty() {
        return None;
    }

    let mut best_distance = DISSIMILAR;
    let mut closest = None;

    for reference in references {
        if reference.as_str() == candidate {
            return Some(reference);
        }
        let distance = metric.distance(candidate, reference);
        if distance < best_distance {
            best_distance = distance;
            closest = Some(reference.as_str());
        }
    }

    if best_distance <= threshold { closest } else { None }
}
