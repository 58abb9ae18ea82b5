#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Parse the typed answer. Empty (after trimming) or anything that is not a
/// plain integer yields `None`; a leading sign is accepted, decimals are not.
pub fn parse_answer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Unparseable input counts as a wrong answer, same as a wrong number.
pub fn check(text: &str, expected: u32) -> Verdict {
    match parse_answer(text) {
        Some(n) if n == i64::from(expected) => Verdict::Correct,
        _ => Verdict::Wrong,
    }
}
