//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are testable independently and are asserted after every
//! successful placement in debug builds.

mod mark_balance;
mod turn_order;

pub use mark_balance::MarkBalanceInvariant;
pub use turn_order::TurnOrderInvariant;

use super::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Returns descriptions of every violated session invariant.
pub fn violations(state: &GameState) -> Vec<&'static str> {
    let mut violated = Vec::new();
    if !MarkBalanceInvariant::holds(state) {
        violated.push(MarkBalanceInvariant::description());
    }
    if !TurnOrderInvariant::holds(state) {
        violated.push(TurnOrderInvariant::description());
    }
    violated
}

/// Panics in debug builds if any invariant is violated.
pub fn assert_invariants(state: &GameState) {
    #[cfg(debug_assertions)]
    {
        let violated = violations(state);
        assert!(violated.is_empty(), "invariants violated: {:?}", violated);
    }
    #[cfg(not(debug_assertions))]
    let _ = state;
}
