pub mod evaluate;
pub mod generate;

/// Position in the split diagram: the total on top, two or three parts below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Top,
    Left,
    Mid,
    Right,
}

/// A single split exercise. Immutable once generated; a retry reuses the
/// same exercise and only resets visual state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exercise {
    pub total: u32,
    pub left: u32,
    /// Present only in three-way splits.
    pub mid: Option<u32>,
    pub right: u32,
    pub missing: Slot,
    /// Value of the hidden slot, fixed by the generator.
    pub answer: u32,
}

impl Exercise {
    pub fn is_three_way(&self) -> bool {
        self.mid.is_some()
    }

    /// Value to display in a slot, or `None` when the slot is the hidden one
    /// (or absent, for `Mid` in a two-way split).
    pub fn shown(&self, slot: Slot) -> Option<u32> {
        if slot == self.missing {
            return None;
        }
        match slot {
            Slot::Top => Some(self.total),
            Slot::Left => Some(self.left),
            Slot::Mid => self.mid,
            Slot::Right => Some(self.right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_way() -> Exercise {
        Exercise {
            total: 7,
            left: 3,
            mid: None,
            right: 4,
            missing: Slot::Left,
            answer: 3,
        }
    }

    #[test]
    fn hidden_slot_is_not_shown() {
        let ex = two_way();
        assert_eq!(ex.shown(Slot::Left), None);
        assert_eq!(ex.shown(Slot::Top), Some(7));
        assert_eq!(ex.shown(Slot::Right), Some(4));
    }

    #[test]
    fn mid_absent_in_two_way() {
        let ex = two_way();
        assert!(!ex.is_three_way());
        assert_eq!(ex.shown(Slot::Mid), None);
    }

    #[test]
    fn mid_shown_in_three_way() {
        let ex = Exercise {
            total: 9,
            left: 2,
            mid: Some(3),
            right: 4,
            missing: Slot::Right,
            answer: 4,
        };
        assert!(ex.is_three_way());
        assert_eq!(ex.shown(Slot::Mid), Some(3));
        assert_eq!(ex.shown(Slot::Right), None);
    }
}
