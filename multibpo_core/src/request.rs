/// Lifecycle of one backend request, shared by every network-driven screen.
/// Each attempt moves `Idle → Pending → {Success, Failure}` and stays there
/// until the user triggers a new attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    /// Nothing has been asked yet.
    Idle,

    /// The request is in flight; the triggering control is disabled.
    Pending,

    /// The request finished and the screen can render the payload.
    Success(T),

    /// The attempt is over; the user has to trigger a new one.
    Failure {
        /// Where the failure came from.
        kind: FailureKind,

        /// What to show inline.
        message: String,
    },
}

/// Where a failure came from. Screens render all three inline, but only
/// validation failures happen without touching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Local validation stopped the attempt before any network call.
    Validation,

    /// The backend answered and said no.
    Backend,

    /// We could not reach the backend or read its answer.
    Connection,
}

impl<T> RequestState<T> {
    /// Whether a request is currently in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Apply a completion, but only if we are still waiting for one. A late
    /// answer that arrives after navigation reset the state is discarded, so
    /// the `Pending → terminal` transition happens at most once per attempt.
    pub fn complete_with(&mut self, next: Self) -> bool {
        if self.is_pending() {
            *self = next;
            true
        } else {
            false
        }
    }

    /// Shorthand for a failure state.
    #[must_use]
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn completion_applies_while_pending() {
        let mut state = RequestState::Pending;

        assert!(state.complete_with(RequestState::Success("ok")));
        assert_eq!(state, RequestState::Success("ok"));
    }

    #[test]
    fn late_completion_is_discarded() {
        let mut state = RequestState::Success("first");

        assert!(!state.complete_with(RequestState::Success("late")));
        assert_eq!(state, RequestState::Success("first"));
    }

    #[test]
    fn completion_does_not_revive_idle() {
        let mut state: RequestState<()> = RequestState::Idle;

        assert!(!state.complete_with(RequestState::failure(
            FailureKind::Connection,
            "too late"
        )));
        assert_eq!(state, RequestState::Idle);
    }
}
