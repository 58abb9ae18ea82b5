use std::time::{Duration, Instant};

/// The three delayed transitions of the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Wrong answer: re-enable the same exercise after a pause.
    Retry,
    /// Correct answer: short pause, then the next exercise.
    Advance,
    /// Streak target hit: celebratory pause, then difficulty goes up.
    Reward,
}

impl TimerKind {
    pub fn delay(self) -> Duration {
        match self {
            TimerKind::Retry => Duration::from_millis(2000),
            TimerKind::Advance => Duration::from_millis(700),
            TimerKind::Reward => Duration::from_millis(3000),
        }
    }
}

/// Single-slot deadline store checked from the tick loop. At most one timer
/// is ever pending: scheduling replaces, cancel clears, and a fired timer
/// clears itself before its action runs.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<(TimerKind, Instant)>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, kind: TimerKind) {
        self.schedule_at(kind, Instant::now());
    }

    pub fn schedule_at(&mut self, kind: TimerKind, now: Instant) {
        self.pending = Some((kind, now + kind.delay()));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_kind(&self) -> Option<TimerKind> {
        self.pending.map(|(kind, _)| kind)
    }

    /// Take the pending timer if its deadline has passed.
    pub fn fire_due(&mut self, now: Instant) -> Option<TimerKind> {
        match self.pending {
            Some((kind, deadline)) if deadline <= now => {
                self.pending = None;
                Some(kind)
            }
            _ => None,
        }
    }
}
