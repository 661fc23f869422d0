/// Fallback when no sub-reason qualifies.
const GENERIC_WHY: &str = "no standout fit signals";

/// Join the non-empty contributing reasons into one human-readable line.
///
/// Formatting lives here, separate from the numeric contract, so wording
/// changes never touch the scoring math.
pub(crate) fn synthesize_why(reasons: &[String]) -> String {
    let parts: Vec<&str> = reasons
        .iter()
        .map(String::as_str)
        .filter(|reason| !reason.is_empty())
        .collect();

    if parts.is_empty() {
        GENERIC_WHY.to_string()
    } else {
        parts.join("; ")
    }
}
