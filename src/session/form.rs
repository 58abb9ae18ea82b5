use rust_i18n::t;
use thiserror::Error;

use crate::exercise::evaluate::parse_answer;

pub const MIN_MAX_TOTAL: u32 = 2;
pub const MAX_MAX_TOTAL: u32 = 500;

/// Start-form rejection reasons, surfaced as an inline message. Never fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("max total must be a whole number")]
    MaxNotInteger,
    #[error("max total must be at least 2")]
    MaxTooSmall,
    #[error("max total must be at most 500")]
    MaxTooLarge,
    #[error("starting score must be zero or greater")]
    ScoreInvalid,
}

impl FormError {
    /// Localized message for the start screen.
    pub fn message(&self) -> String {
        match self {
            FormError::MaxNotInteger => t!("start.error.not_integer").into_owned(),
            FormError::MaxTooSmall => t!("start.error.too_small").into_owned(),
            FormError::MaxTooLarge => t!("start.error.too_large").into_owned(),
            FormError::ScoreInvalid => t!("start.error.bad_score").into_owned(),
        }
    }
}

/// Validate the two numeric start-form fields. Checks run in display order:
/// max total first (parse, lower bound, upper bound), then starting score.
pub fn validate(max_text: &str, score_text: &str) -> Result<(u32, u32), FormError> {
    let max = parse_answer(max_text).ok_or(FormError::MaxNotInteger)?;
    if max < i64::from(MIN_MAX_TOTAL) {
        return Err(FormError::MaxTooSmall);
    }
    if max > i64::from(MAX_MAX_TOTAL) {
        return Err(FormError::MaxTooLarge);
    }

    let score = parse_answer(score_text).ok_or(FormError::ScoreInvalid)?;
    let score = u32::try_from(score).map_err(|_| FormError::ScoreInvalid)?;

    Ok((max as u32, score))
}
