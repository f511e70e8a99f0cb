use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Number of seats (and chopsticks) at the table.
pub const SEATS: usize = 5;

/// Errors raised by the contention model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentionError {
    /// Seat index outside `0..SEATS`.
    #[error("no such seat: {0}")]
    NoSuchSeat(usize),
    /// Chopstick index outside `0..SEATS`.
    #[error("no such chopstick: {0}")]
    NoSuchChopstick(usize),
}

/// What a philosopher is doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatState {
    #[default]
    Thinking,
    Eating,
}

/// Result of a [`TableState::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Seat acquired both chopsticks and is now eating.
    Started,
    /// Seat stopped eating and released both chopsticks.
    Stopped,
    /// A chopstick was held by someone else; nothing changed.
    Blocked,
}

/// Snapshot of the table: chopstick locks and seat states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    /// `true` = held.
    chopsticks: [bool; SEATS],
    seats: [SeatState; SEATS],
}

impl TableState {
    /// Everyone thinking, every chopstick free.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from explicit lock and seat values.
    ///
    /// No consistency check is made, so a circular-wait snapshot (every
    /// lock held, every seat thinking) can be loaded.
    pub fn from_parts(chopsticks: [bool; SEATS], seats: [SeatState; SEATS]) -> Self {
        Self { chopsticks, seats }
    }

    /// Left and right chopstick of a seat.
    pub fn chopsticks_of(seat: usize) -> (usize, usize) {
        (seat, (seat + 1) % SEATS)
    }

    /// State of one seat.
    ///
    /// # Errors
    /// [`ContentionError::NoSuchSeat`] if `seat >= SEATS`.
    pub fn seat(&self, seat: usize) -> Result<SeatState, ContentionError> {
        self.seats
            .get(seat)
            .copied()
            .ok_or(ContentionError::NoSuchSeat(seat))
    }

    /// Whether a chopstick is currently held.
    ///
    /// # Errors
    /// [`ContentionError::NoSuchChopstick`] if `chopstick >= SEATS`.
    pub fn is_held(&self, chopstick: usize) -> Result<bool, ContentionError> {
        self.chopsticks
            .get(chopstick)
            .copied()
            .ok_or(ContentionError::NoSuchChopstick(chopstick))
    }

    /// Number of seats currently eating.
    pub fn eating_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| **s == SeatState::Eating)
            .count()
    }

    /// Toggles a seat between thinking and eating.
    ///
    /// # Transitions
    /// - eating → thinking, both chopsticks released (`Stopped`)
    /// - thinking with both chopsticks free → eating, both acquired (`Started`)
    /// - otherwise the state is returned unchanged (`Blocked`)
    ///
    /// # Errors
    /// [`ContentionError::NoSuchSeat`] if `seat >= SEATS`.
    pub fn toggle(&self, seat: usize) -> Result<(TableState, ToggleOutcome), ContentionError> {
        if seat >= SEATS {
            return Err(ContentionError::NoSuchSeat(seat));
        }
        let (left, right) = Self::chopsticks_of(seat);
        let mut next = *self;

        let outcome = match self.seats[seat] {
            SeatState::Eating => {
                next.seats[seat] = SeatState::Thinking;
                next.chopsticks[left] = false;
                next.chopsticks[right] = false;
                ToggleOutcome::Stopped
            }
            SeatState::Thinking if !self.chopsticks[left] && !self.chopsticks[right] => {
                next.seats[seat] = SeatState::Eating;
                next.chopsticks[left] = true;
                next.chopsticks[right] = true;
                ToggleOutcome::Started
            }
            SeatState::Thinking => ToggleOutcome::Blocked,
        };

        debug!(seat, ?outcome, "toggle");
        if next.is_deadlocked() {
            warn!("deadlock: every chopstick held and no seat eating");
        }
        Ok((next, outcome))
    }

    /// Every seat is not eating and every chopstick is held.
    pub fn is_deadlocked(&self) -> bool {
        self.seats.iter().all(|s| *s != SeatState::Eating) && self.chopsticks.iter().all(|c| *c)
    }

    /// One-line lock summary, e.g. `0:held 1:free 2:free 3:held 4:free`.
    pub fn lock_report(&self) -> String {
        self.chopsticks
            .iter()
            .enumerate()
            .map(|(i, held)| format!("{i}:{}", if *held { "held" } else { "free" }))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for TableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seat) in self.seats.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            let mark = match seat {
                SeatState::Thinking => 'T',
                SeatState::Eating => 'E',
            };
            write!(f, "{i}{mark}")?;
        }
        write!(f, " | {}", self.lock_report())
    }
}
