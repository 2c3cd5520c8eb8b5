//! Identifier generation for card templates and decks.
//!
//! Anki keys models and decks by integer id. Ids only need to be distinct within one run,
//! so production draws them at random from `[2^30, 2^31)`. Tests use [`SequenceIds`] to get
//! predictable values.

use rand::Rng;

pub const ID_MIN: i64 = 1 << 30;
pub const ID_MAX: i64 = 1 << 31;

pub trait IdSource {
    /// Returns a value in `[ID_MIN, ID_MAX)`.
    fn next_id(&mut self) -> i64;
}

/// Draws ids from the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> i64 {
        rand::thread_rng().gen_range(ID_MIN..ID_MAX)
    }
}

/// Hands out `start`, `start + 1`, ... wrapping back to `ID_MIN` at the top of the range.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug)]
pub struct SequenceIds {
    next: i64,
}

#[cfg(any(test, feature = "test_utils"))]
impl SequenceIds {
    pub fn starting_at(start: i64) -> Self {
        Self {
            next: start.clamp(ID_MIN, ID_MAX - 1),
        }
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl Default for SequenceIds {
    fn default() -> Self {
        Self::starting_at(ID_MIN)
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl IdSource for SequenceIds {
    fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next = if id + 1 >= ID_MAX { ID_MIN } else { id + 1 };
        id
    }
}
