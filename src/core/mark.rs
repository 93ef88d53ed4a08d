//! Per-letter feedback marks

/// Quality of a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right position
    Correct,
    /// Right letter, wrong position (and not already claimed elsewhere)
    Present,
    /// Letter not present or already used up
    Absent,
    /// The whole guess was rejected
    Invalid,
}
