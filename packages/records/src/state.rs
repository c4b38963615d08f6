//! View state machines.
//!
//! [`LoadState`] tracks the fetch a view performs on mount. [`SubmitState`]
//! tracks a create or update submission:
//!
//! ```text
//! editing -> submitting -> success
//!                       -> error -> editing
//! ```

/// Outcome of the fetch a view performs when it mounts.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// Terminal: the view shows `message` and nothing else from the fetch.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

/// Where a form submission stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Editing,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmitState {
    /// Start a submission. Allowed from any state; nothing guards against a
    /// second submission while one is in flight.
    pub fn begin(&mut self) {
        *self = SubmitState::Submitting;
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        *self = SubmitState::Succeeded(message.into());
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = SubmitState::Failed(message.into());
    }

    /// Go back to editing after the user changes a field following an error.
    pub fn edit(&mut self) {
        if matches!(self, SubmitState::Failed(_)) {
            *self = SubmitState::Editing;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            SubmitState::Succeeded(message) => Some(message),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
