//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while assigning AI guesses.
///
/// Out-of-range or out-of-phase submissions are never errors: the engine
/// clamps the former and silently ignores the latter. The only failable
/// path is unique-guess assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// No unused guess value exists in `[0, max_guess]` for an AI player.
    ///
    /// This cannot occur in valid play: the guess range always has room for
    /// every active player. Hitting it means an engine invariant was broken,
    /// so it is surfaced as a hard failure rather than a duplicate guess.
    #[error("logic invariant violation: no unique guess value available")]
    LogicInvariantViolation,
}
