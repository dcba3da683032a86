use crate::model::CandidateRole;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

lazy_static! {
    static ref VICE_MAYORAL_RX: Regex =
        Regex::new(r"(?i)^\s*(vicealcalde|vice[\s_-]?mayor)").unwrap();
    static ref MAYORAL_RX: Regex = Regex::new(r"(?i)^\s*(alcalde|mayor)").unwrap();
    static ref COUNCIL_RX: Regex = Regex::new(r"(?i)^\s*(regidor|council)").unwrap();
}

/// Classify a free-text office label. Vice-mayoral is checked first since
/// its labels would otherwise read as mayoral ones.
pub fn classify_role(label: &str) -> Option<CandidateRole> {
    if VICE_MAYORAL_RX.is_match(label) {
        Some(CandidateRole::ViceMayoral)
    } else if MAYORAL_RX.is_match(label) {
        Some(CandidateRole::Mayoral)
    } else if COUNCIL_RX.is_match(label) {
        Some(CandidateRole::Council)
    } else {
        None
    }
}

/// Clamp a raw vote figure to a whole, non-negative count.
pub fn normalize_votes(raw: f64, context: &str) -> u64 {
    if !raw.is_finite() || raw < 0.0 {
        warn!(context, raw, "malformed vote count normalized to zero");
        return 0;
    }
    if raw.fract() != 0.0 {
        warn!(context, raw, "fractional vote count truncated");
    }
    raw.trunc() as u64
}
