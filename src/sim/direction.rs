//! Movement directions and the input arbiter
//!
//! Direction requests arrive between ticks, possibly several per tick. The
//! arbiter keeps a single mailbox slot: the latest valid request wins, and if
//! nothing new arrives the last committed direction carries over.

use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Cell delta (dx, dy); y grows downward
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Single-slot mailbox for a pending direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mailbox {
    #[default]
    Empty,
    Queued(Direction),
}

/// Resolves raw direction requests into the direction used by each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionArbiter {
    committed: Direction,
    mailbox: Mailbox,
}

impl DirectionArbiter {
    pub fn new(initial: Direction) -> Self {
        Self {
            committed: initial,
            mailbox: Mailbox::Empty,
        }
    }

    /// Direction used by the most recent tick
    pub fn committed(&self) -> Direction {
        self.committed
    }

    /// Pending request, if any
    pub fn queued(&self) -> Option<Direction> {
        match self.mailbox {
            Mailbox::Empty => None,
            Mailbox::Queued(d) => Some(d),
        }
    }

    /// Direction the next tick will use if no further input arrives
    pub fn upcoming(&self) -> Direction {
        self.queued().unwrap_or(self.committed)
    }

    /// Queue a direction for the next tick.
    ///
    /// A reversal of the committed direction is dropped and `false` is
    /// returned. Anything else replaces whatever was queued before.
    pub fn request(&mut self, direction: Direction) -> bool {
        if self.committed.is_opposite(direction) {
            log::debug!("Rejected reversal {:?} -> {:?}", self.committed, direction);
            return false;
        }
        self.mailbox = Mailbox::Queued(direction);
        true
    }

    /// Take the queued direction (if any) as the new committed direction and
    /// empty the mailbox. Called exactly once per tick.
    pub fn commit(&mut self) -> Direction {
        if let Mailbox::Queued(direction) = std::mem::take(&mut self.mailbox) {
            self.committed = direction;
        }
        self.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_opposites() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert!(Direction::Right.is_opposite(Direction::Left));
        assert!(!Direction::Right.is_opposite(Direction::Up));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_reversal_rejected() {
        let mut arbiter = DirectionArbiter::new(Direction::Right);
        assert!(!arbiter.request(Direction::Left));
        assert_eq!(arbiter.queued(), None);
        assert_eq!(arbiter.commit(), Direction::Right);
    }

    #[test]
    fn test_latest_request_wins() {
        let mut arbiter = DirectionArbiter::new(Direction::Right);
        assert!(arbiter.request(Direction::Up));
        assert!(arbiter.request(Direction::Down));
        assert_eq!(arbiter.commit(), Direction::Down);
    }

    #[test]
    fn test_reversal_checked_against_committed_not_queued() {
        // Moving right, queue Up, then Left is still a reversal of Right
        let mut arbiter = DirectionArbiter::new(Direction::Right);
        arbiter.request(Direction::Up);
        assert!(!arbiter.request(Direction::Left));
        assert_eq!(arbiter.commit(), Direction::Up);

        // Once Up is committed, Left becomes legal
        assert!(arbiter.request(Direction::Left));
        assert_eq!(arbiter.commit(), Direction::Left);
    }

    #[test]
    fn test_committed_direction_rolls_over() {
        let mut arbiter = DirectionArbiter::new(Direction::Right);
        arbiter.request(Direction::Down);
        assert_eq!(arbiter.commit(), Direction::Down);
        assert_eq!(arbiter.queued(), None);
        // Nothing new queued: keep going down
        assert_eq!(arbiter.commit(), Direction::Down);
        assert_eq!(arbiter.upcoming(), Direction::Down);
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_commit_is_last_valid_request(
            start in any_direction(),
            requests in prop::collection::vec(any_direction(), 0..8),
        ) {
            let mut arbiter = DirectionArbiter::new(start);
            for &d in &requests {
                arbiter.request(d);
            }
            let expected = requests
                .iter()
                .rev()
                .copied()
                .find(|d| !start.is_opposite(*d))
                .unwrap_or(start);
            prop_assert_eq!(arbiter.commit(), expected);
        }

        #[test]
        fn prop_reversal_never_commits(start in any_direction()) {
            let mut arbiter = DirectionArbiter::new(start);
            arbiter.request(start.opposite());
            prop_assert_eq!(arbiter.commit(), start);
        }
    }
}
