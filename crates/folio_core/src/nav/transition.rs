//! Exit-then-enter page transition state machine.
//!
//! # Responsibility
//! - Sequence page swaps so the outgoing page finishes exiting before the
//!   incoming page starts entering.
//! - Report which route key is mounted at any moment.
//!
//! # Invariants
//! - Exactly one route key is mounted in every phase.
//! - Requesting the key that is already shown does not restart animation.
//! - Completion events that do not match the current phase are ignored.

use crate::nav::route::RouteKey;
use log::debug;
use serde::Serialize;

/// Transition phase keyed by route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum TransitionPhase {
    /// `live` is fully shown.
    Idle { live: RouteKey },
    /// `leaving` is animating out; `pending` mounts once it is gone.
    Exiting { leaving: RouteKey, pending: RouteKey },
    /// `entering` is animating in.
    Entering { entering: RouteKey },
}

/// Drives `TransitionPhase` from navigation requests and renderer callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionMachine {
    phase: TransitionPhase,
}

impl TransitionMachine {
    /// Starts by animating the initial page in.
    pub fn new(initial: RouteKey) -> Self {
        Self {
            phase: TransitionPhase::Entering { entering: initial },
        }
    }

    pub fn phase(&self) -> &TransitionPhase {
        &self.phase
    }

    /// The single route key currently mounted.
    pub fn mounted(&self) -> &RouteKey {
        match &self.phase {
            TransitionPhase::Idle { live } => live,
            TransitionPhase::Exiting { leaving, .. } => leaving,
            TransitionPhase::Entering { entering } => entering,
        }
    }

    /// Route key the machine is heading to.
    pub fn target(&self) -> &RouteKey {
        match &self.phase {
            TransitionPhase::Idle { live } => live,
            TransitionPhase::Exiting { pending, .. } => pending,
            TransitionPhase::Entering { entering } => entering,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, TransitionPhase::Idle { .. })
    }

    /// Requests a swap to `key`. Returns whether the phase changed.
    pub fn request(&mut self, key: RouteKey) -> bool {
        let next = match &self.phase {
            TransitionPhase::Idle { live } | TransitionPhase::Entering { entering: live } => {
                if *live == key {
                    return false;
                }
                TransitionPhase::Exiting {
                    leaving: live.clone(),
                    pending: key,
                }
            }
            TransitionPhase::Exiting { leaving, pending } => {
                if *pending == key {
                    return false;
                }
                TransitionPhase::Exiting {
                    leaving: leaving.clone(),
                    pending: key,
                }
            }
        };
        self.phase = next;
        true
    }

    /// Renderer callback: the outgoing page finished its exit animation.
    pub fn exit_finished(&mut self) -> bool {
        let TransitionPhase::Exiting { pending, .. } = &self.phase else {
            debug!(
                "event=transition_event_ignored module=nav event_kind=exit_finished mounted={}",
                self.mounted()
            );
            return false;
        };
        self.phase = TransitionPhase::Entering {
            entering: pending.clone(),
        };
        true
    }

    /// Renderer callback: the incoming page finished its enter animation.
    pub fn enter_finished(&mut self) -> bool {
        let TransitionPhase::Entering { entering } = &self.phase else {
            debug!(
                "event=transition_event_ignored module=nav event_kind=enter_finished mounted={}",
                self.mounted()
            );
            return false;
        };
        self.phase = TransitionPhase::Idle {
            live: entering.clone(),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{TransitionMachine, TransitionPhase};
    use crate::nav::route::{Route, RouteKey};

    fn key(path: &str) -> RouteKey {
        Route::parse(path).key()
    }

    fn settled(path: &str) -> TransitionMachine {
        let mut machine = TransitionMachine::new(key(path));
        assert!(machine.enter_finished());
        machine
    }

    #[test]
    fn initial_page_enters_then_settles() {
        let mut machine = TransitionMachine::new(key("/"));
        assert_eq!(machine.mounted(), &key("/"));
        assert!(!machine.is_settled());
        assert!(machine.enter_finished());
        assert_eq!(
            machine.phase(),
            &TransitionPhase::Idle { live: key("/") }
        );
    }

    #[test]
    fn swap_exits_before_entering() {
        let mut machine = settled("/");
        assert!(machine.request(key("/about")));
        assert_eq!(machine.mounted(), &key("/"));
        assert_eq!(machine.target(), &key("/about"));

        assert!(!machine.enter_finished());
        assert!(machine.exit_finished());
        assert_eq!(machine.mounted(), &key("/about"));
        assert!(machine.enter_finished());
        assert!(machine.is_settled());
    }

    #[test]
    fn same_key_request_is_a_no_op() {
        let mut machine = settled("/projects");
        assert!(!machine.request(key("/projects/")));
        assert!(machine.is_settled());
    }

    #[test]
    fn request_while_exiting_replaces_pending() {
        let mut machine = settled("/");
        machine.request(key("/about"));
        assert!(machine.request(key("/contact")));
        assert_eq!(
            machine.phase(),
            &TransitionPhase::Exiting {
                leaving: key("/"),
                pending: key("/contact"),
            }
        );
    }

    #[test]
    fn request_while_entering_exits_the_entering_page() {
        let mut machine = TransitionMachine::new(key("/"));
        assert!(machine.request(key("/projects/a")));
        assert_eq!(machine.mounted(), &key("/"));
        machine.exit_finished();
        assert_eq!(machine.mounted(), &key("/projects/a"));
    }
}
