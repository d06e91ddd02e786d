use super::LoadError;

/// Load state of one displayed item.
///
/// Starts `Pending` and settles exactly once. A settled phase never changes
/// again; retrying replaces it with a fresh `Pending` phase.
#[derive(Clone, Debug, PartialEq)]
pub enum ContentPhase<C> {
    Pending,
    Loaded(C),
    Failed(LoadError),
}

impl<C> ContentPhase<C> {
    pub fn is_pending(&self) -> bool {
        matches!(self, ContentPhase::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ContentPhase::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ContentPhase::Failed(_))
    }

    pub fn content(&self) -> Option<&C> {
        match self {
            ContentPhase::Loaded(content) => Some(content),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            ContentPhase::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Settles a pending phase with the acquisition result.
    ///
    /// Returns `false` and leaves the phase untouched when it has already
    /// settled.
    pub fn complete(&mut self, result: Result<C, LoadError>) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = match result {
            Ok(content) => ContentPhase::Loaded(content),
            Err(error) => ContentPhase::Failed(error),
        };
        true
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentPhase::Pending => "pending",
            ContentPhase::Loaded(_) => "loaded",
            ContentPhase::Failed(_) => "failed",
        }
    }
}

impl<C> Default for ContentPhase<C> {
    fn default() -> Self {
        ContentPhase::Pending
    }
}

#[cfg(test)]
#[path = "tests/phase_tests.rs"]
mod tests;
