//! Location field normalization.
//!
//! The source extract prefixes most street descriptions with the literal
//! `"On or near"` and leaves some blank. The pipeline applied here is
//! deterministic and idempotent, so re-normalizing an already-normalized
//! value is a no-op.

use dorset_dash_incident_models::NO_LOCATION;

/// Literal prefix the police extract puts in front of street names.
const ON_OR_NEAR: &str = "On or near";

/// Normalizes a raw location description.
///
/// The pipeline:
/// 1. Remove every occurrence of the case-sensitive literal `"On or near"`
/// 2. Trim surrounding whitespace
/// 3. Map empty or whitespace-only results to the [`NO_LOCATION`] sentinel
///
/// The result is never empty or pure whitespace.
#[must_use]
pub fn normalize_location(raw: &str) -> String {
    let stripped = if raw.contains(ON_OR_NEAR) {
        raw.replace(ON_OR_NEAR, "")
    } else {
        raw.to_string()
    };

    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        NO_LOCATION.to_string()
    } else {
        trimmed.to_string()
    }
}
