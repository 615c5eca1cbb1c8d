//! Per-session serialization of submissions.
//!
//! A session may have at most one translation in flight. A second
//! submission while the first is still running is turned away rather than
//! queued, which mirrors a UI that disables its button during the call.
//! Different sessions never block each other.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

pub const SESSION_HEADER: &str = "x-session-id";

#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    in_flight: Arc<Mutex<HashSet<String>>>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        // The set stays consistent even if a holder panicked
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Claim the session for one submission.
    ///
    /// Returns `None` if the session already has a submission in flight.
    /// The claim is released when the returned permit is dropped.
    pub fn try_acquire(&self, session_id: &str) -> Option<SessionPermit> {
        if !self.lock().insert(session_id.to_string()) {
            debug!("Session {} already has a translation in flight", session_id);
            return None;
        }

        Some(SessionPermit {
            gate: self.clone(),
            session_id: session_id.to_string(),
        })
    }

    pub fn is_busy(&self, session_id: &str) -> bool {
        self.lock().contains(session_id)
    }

    pub fn in_flight_count(&self) -> usize {
        self.lock().len()
    }
}

/// Held for the duration of one submission.
#[derive(Debug)]
pub struct SessionPermit {
    gate: SessionGate,
    session_id: String,
}

impl SessionPermit {
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

impl Drop for SessionPermit {
    fn drop(&mut self) {
        self.gate.lock().remove(&self.session_id);
    }
}
