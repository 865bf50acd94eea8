//! The "submit anyway" gate in front of order creation.
//!
//! When the filter finds existing orders, the first submit shows them
//! instead of creating the order; a second submit creates it anyway.
//!
//! ```text
//! Editing --submit(n > 0)--> ShowingMatches --submit--> Create
//!    |  \--submit(n == 0)--> Create
//!    \<-------------reset-------------/
//! ```

use std::fmt;

/// Where the maker is in the confirmation flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GateState {
    /// Filling in the form; matches (if any) are not shown yet.
    #[default]
    Editing,
    /// Matches are on screen and the form is collapsed.
    ShowingMatches,
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Editing => write!(f, "EDITING"),
            Self::ShowingMatches => write!(f, "SHOWING_MATCHES"),
        }
    }
}

/// What a submit press should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateDecision {
    /// Reveal the matching orders; do not create anything.
    ShowMatches,
    /// Send the order creation request.
    Create,
}

/// Tracks whether the maker has already seen the matching orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGate {
    state: GateState,
}

impl SubmitGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Handle a submit press given the current number of matches.
    pub fn on_submit(&mut self, match_count: usize) -> GateDecision {
        match self.state {
            GateState::Editing if match_count > 0 => {
                tracing::debug!(matches = match_count, "Existing orders match; showing them first");
                self.state = GateState::ShowingMatches;
                GateDecision::ShowMatches
            }
            GateState::Editing | GateState::ShowingMatches => GateDecision::Create,
        }
    }

    /// The form was reset; hide matches and start over.
    pub fn on_reset(&mut self) {
        self.state = GateState::Editing;
    }

    /// Whether the match preview should be visible.
    #[must_use]
    pub fn matches_visible(&self, match_count: usize) -> bool {
        match_count > 0 && self.state == GateState::ShowingMatches
    }

    /// Whether the form's own create request is held back.
    #[must_use]
    pub fn request_disabled(&self, match_count: usize) -> bool {
        match_count > 0 && self.state == GateState::Editing
    }

    /// Whether the form's optional sections are collapsed.
    #[must_use]
    pub fn collapse_form(&self) -> bool {
        self.state == GateState::ShowingMatches
    }

    /// Label for the submit button.
    #[must_use]
    pub fn submit_label(&self, match_count: usize) -> &'static str {
        if self.request_disabled(match_count) {
            "Submit"
        } else {
            "Create order"
        }
    }
}
