//! # Identifier Sequence
//!
//! Monotonic counter that hands out entity identifiers. The sequence starts at 0 and is
//! incremented before each issue, so the first identifier is 1. Issued values are never
//! handed out again, even after the entity holding them is deleted.

/// Monotonic `u64` identifier source owned by a [`ResourceActor`](crate::ResourceActor).
///
/// Issuing is split into [`peek`](IdSequence::peek) and [`commit`](IdSequence::commit) so the
/// actor can build an entity with the candidate id and only burn the value once the entity
/// is actually stored. A rejected create leaves the sequence untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// A fresh sequence; the first issued value is 1.
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// A sequence that behaves as if `last` had already been issued.
    pub const fn starting_after(last: u64) -> Self {
        Self { last }
    }

    /// The value the next successful issue will use, or `None` once `u64::MAX` is spent.
    pub fn peek(&self) -> Option<u64> {
        self.last.checked_add(1)
    }

    /// Marks `issued` (obtained from [`peek`](IdSequence::peek)) as used.
    pub fn commit(&mut self, issued: u64) {
        debug_assert!(issued > self.last, "sequence must only move forward");
        self.last = issued;
    }

    /// Peeks and commits in one step.
    pub fn next(&mut self) -> Option<u64> {
        let issued = self.peek()?;
        self.commit(issued);
        Some(issued)
    }

    /// The most recently issued value (0 if nothing was issued yet).
    pub fn last_issued(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_issue_is_one() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.next(), Some(1));
        assert_eq!(ids.next(), Some(2));
        assert_eq!(ids.last_issued(), 2);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut ids = IdSequence::new();
        assert_eq!(ids.peek(), Some(1));
        assert_eq!(ids.peek(), Some(1));
        assert_eq!(ids.last_issued(), 0);

        ids.commit(1);
        assert_eq!(ids.peek(), Some(2));
    }

    #[test]
    fn test_exhausted_sequence() {
        let mut ids = IdSequence::starting_after(u64::MAX - 1);
        assert_eq!(ids.next(), Some(u64::MAX));
        assert_eq!(ids.peek(), None);
        assert_eq!(ids.next(), None);
        assert_eq!(ids.last_issued(), u64::MAX);
    }
}
