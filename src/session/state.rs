/// Consecutive correct answers needed to trigger the reward pause.
pub const STREAK_TARGET: u32 = 5;

/// How much the max total grows after each reward pause.
pub const REWARD_MAX_STEP: u32 = 2;

/// Validated output of the start form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSettings {
    pub max_total: u32,
    pub allow_top_missing: bool,
    pub three_way_split: bool,
    pub starting_score: u32,
}

/// What happens after a correct answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Short pause, then the next exercise.
    Advance,
    /// Streak target reached: reward pause, then difficulty goes up.
    Reward,
}

/// Score, streak, and difficulty for one play session. Created at game start,
/// dropped on stop; only the progression methods below mutate it.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub max_total: u32,
    pub allow_top_missing: bool,
    pub three_way_split: bool,
    pub score: u32,
    pub streak: u32,
}

impl SessionState {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            max_total: settings.max_total,
            allow_top_missing: settings.allow_top_missing,
            three_way_split: settings.three_way_split,
            score: settings.starting_score,
            streak: 0,
        }
    }

    pub fn record_correct(&mut self) -> Progress {
        self.score += 1;
        self.streak += 1;
        if self.streak >= STREAK_TARGET {
            Progress::Reward
        } else {
            Progress::Advance
        }
    }

    pub fn record_wrong(&mut self) {
        self.streak = 0;
    }

    /// Applied when the reward pause ends.
    pub fn apply_reward(&mut self) {
        self.max_total += REWARD_MAX_STEP;
        self.streak = 0;
    }

    // HUD label formats are fixed, not localized.
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn max_label(&self) -> String {
        format!("Max: {}", self.max_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GameSettings {
        GameSettings {
            max_total: 10,
            allow_top_missing: false,
            three_way_split: false,
            starting_score: 0,
        }
    }

    #[test]
    fn starting_score_is_kept() {
        let state = SessionState::new(GameSettings {
            starting_score: 3,
            ..settings()
        });
        assert_eq!(state.score, 3);
        assert_eq!(state.streak, 0);
        assert_eq!(state.score_label(), "Score: 3");
        assert_eq!(state.max_label(), "Max: 10");
    }

    #[test]
    fn correct_increments_score_and_streak() {
        let mut state = SessionState::new(settings());
        assert_eq!(state.record_correct(), Progress::Advance);
        assert_eq!(state.score, 1);
        assert_eq!(state.streak, 1);
    }

    #[test]
    fn fifth_correct_in_a_row_rewards() {
        let mut state = SessionState::new(settings());
        for _ in 0..STREAK_TARGET - 1 {
            assert_eq!(state.record_correct(), Progress::Advance);
        }
        assert_eq!(state.record_correct(), Progress::Reward);
        assert_eq!(state.streak, STREAK_TARGET);
    }

    #[test]
    fn wrong_resets_streak_but_not_score() {
        let mut state = SessionState::new(settings());
        state.record_correct();
        state.record_correct();
        state.record_wrong();
        assert_eq!(state.streak, 0);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn reward_raises_max_and_resets_streak() {
        let mut state = SessionState::new(settings());
        for _ in 0..STREAK_TARGET {
            state.record_correct();
        }
        state.apply_reward();
        assert_eq!(state.max_total, 12);
        assert_eq!(state.streak, 0);
        assert_eq!(state.score, STREAK_TARGET);
    }

    #[test]
    fn wrong_after_partial_streak_restarts_count() {
        let mut state = SessionState::new(settings());
        for _ in 0..4 {
            state.record_correct();
        }
        state.record_wrong();
        // The next correct is streak 1 again, not a reward.
        assert_eq!(state.record_correct(), Progress::Advance);
    }
}
