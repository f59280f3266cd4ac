// src/state/selection.rs
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Identity of one pending map load. A ticket goes stale as soon as another
/// selection is made, so its completion can never mark a newer selection as
/// ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadPhase {
    Idle,
    Loading {
        profile_id: u32,
        ticket: LoadTicket,
        ready_at: Instant,
    },
    Ready {
        profile_id: u32,
    },
}

#[derive(Debug)]
pub struct SelectionState {
    phase: LoadPhase,
    next_ticket: u64,
    load_delay: Duration,
}

impl SelectionState {
    pub fn new(load_delay: Duration) -> Self {
        Self {
            phase: LoadPhase::Idle,
            next_ticket: 0,
            load_delay,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn selected(&self) -> Option<u32> {
        match self.phase {
            LoadPhase::Idle => None,
            LoadPhase::Loading { profile_id, .. } | LoadPhase::Ready { profile_id } => Some(profile_id),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, LoadPhase::Ready { .. })
    }

    /// Selects a profile and restarts the simulated load, even when the same
    /// profile is already selected.
    pub fn select(&mut self, profile_id: u32, now: Instant) -> LoadTicket {
        if let LoadPhase::Loading { profile_id: previous, ticket, .. } = self.phase {
            debug!(previous, ?ticket, "cancelled pending map load");
        }

        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = LoadPhase::Loading {
            profile_id,
            ticket,
            ready_at: now + self.load_delay,
        };
        info!(profile_id, ?ticket, "profile selected");
        ticket
    }

    /// Finishes the load belonging to `ticket`. Returns false for a stale
    /// ticket, leaving the current state untouched.
    pub fn complete(&mut self, ticket: LoadTicket) -> bool {
        match self.phase {
            LoadPhase::Loading { profile_id, ticket: current, .. } if current == ticket => {
                self.phase = LoadPhase::Ready { profile_id };
                info!(profile_id, "map loaded");
                true
            }
            _ => false,
        }
    }

    /// Fires the pending load if it is due. Returns how long until it will be,
    /// so the caller can schedule a repaint.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        let LoadPhase::Loading { ticket, ready_at, .. } = self.phase else {
            return None;
        };

        if now >= ready_at {
            self.complete(ticket);
            None
        } else {
            Some(ready_at - now)
        }
    }

    /// Drops any pending load when the view goes away.
    pub fn teardown(&mut self) {
        if let LoadPhase::Loading { profile_id, ticket, .. } = self.phase {
            debug!(profile_id, ?ticket, "pending map load dropped on teardown");
            self.phase = LoadPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    #[test]
    fn starts_idle() {
        let state = SelectionState::new(DELAY);
        assert_eq!(state.phase(), LoadPhase::Idle);
        assert_eq!(state.selected(), None);
        assert!(!state.is_loaded());
    }

    #[test]
    fn becomes_ready_after_delay() {
        let start = Instant::now();
        let mut state = SelectionState::new(DELAY);
        state.select(2, start);

        assert_eq!(state.poll(start + Duration::from_millis(400)), Some(Duration::from_millis(600)));
        assert!(!state.is_loaded());

        assert_eq!(state.poll(start + DELAY), None);
        assert_eq!(state.phase(), LoadPhase::Ready { profile_id: 2 });
    }

    #[test]
    fn reselection_cancels_pending_load() {
        let start = Instant::now();
        let mut state = SelectionState::new(DELAY);
        let first = state.select(1, start);
        let second = state.select(3, start + Duration::from_millis(900));
        assert_ne!(first, second);

        // The first load's deadline passes but must not mark anything ready.
        state.poll(start + DELAY);
        assert!(!state.is_loaded());
        assert!(!state.complete(first));
        assert_eq!(state.selected(), Some(3));

        state.poll(start + Duration::from_millis(1900));
        assert_eq!(state.phase(), LoadPhase::Ready { profile_id: 3 });
    }

    #[test]
    fn stale_ticket_after_ready_is_ignored() {
        let start = Instant::now();
        let mut state = SelectionState::new(DELAY);
        let first = state.select(1, start);
        state.select(4, start);
        assert!(!state.complete(first));
        assert!(matches!(state.phase(), LoadPhase::Loading { profile_id: 4, .. }));
    }

    #[test]
    fn reselecting_same_profile_resets_loading() {
        let start = Instant::now();
        let mut state = SelectionState::new(DELAY);
        state.select(5, start);
        state.poll(start + DELAY);
        assert!(state.is_loaded());

        let later = start + Duration::from_secs(5);
        state.select(5, later);
        assert!(!state.is_loaded());
        assert_eq!(state.selected(), Some(5));
        assert_eq!(state.poll(later), Some(DELAY));
    }

    #[test]
    fn teardown_drops_pending_load() {
        let start = Instant::now();
        let mut state = SelectionState::new(DELAY);
        let ticket = state.select(6, start);
        state.teardown();

        assert!(!state.complete(ticket));
        assert_eq!(state.poll(start + DELAY), None);
        assert_eq!(state.phase(), LoadPhase::Idle);
    }
}
