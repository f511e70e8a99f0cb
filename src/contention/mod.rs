//! Dining-philosophers lock contention.
//!
//! A small companion to the CPU scheduler: five seats share five binary
//! chopstick locks arranged in a ring. Every transition is pure; callers
//! keep the current [`TableState`] and replace it with the returned one.
//!
//! # Model
//!
//! | Concept | Representation |
//! |---------|----------------|
//! | Philosopher | [`SeatState`] at index `i` |
//! | Left chopstick | lock `i` |
//! | Right chopstick | lock `(i + 1) % SEATS` |
//!
//! A seat starts eating only if both of its locks are free, and then takes
//! both at once. Deadlock (every lock held, nobody eating) cannot arise from
//! [`TableState::toggle`] alone; it is reachable through
//! [`TableState::from_parts`] and is detected, never resolved.
//!
//! # Reference
//! Dijkstra (1971), "Hierarchical Ordering of Sequential Processes"

mod table;

pub use table::{ContentionError, SeatState, TableState, ToggleOutcome, SEATS};
