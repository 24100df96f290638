//! Session State
//!
//! Transient coordination state owned by the page session. Nothing here
//! outlives a page load.

/// Ingredient picked for reclassification
///
/// Single slot: every `open` overwrites the previous target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReclassifyTarget {
    ingredient_name: Option<String>,
    /// Inline error from the last failed confirm
    pub error: Option<String>,
}

impl ReclassifyTarget {
    pub fn open(&mut self, name: String) {
        self.ingredient_name = Some(name);
        self.error = None;
    }

    pub fn close(&mut self) {
        self.ingredient_name = None;
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.ingredient_name.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.ingredient_name.as_deref()
    }

    /// Dialog title for the current target
    pub fn title(&self) -> String {
        format!("Move: {}", self.ingredient_name.as_deref().unwrap_or_default())
    }

    /// Record a failed confirm for `name`. Dropped when the picker has
    /// moved on to another ingredient or been closed.
    pub fn fail(&mut self, name: &str, message: String) {
        if self.name() == Some(name) {
            self.error = Some(message);
        }
    }

    /// Build the update request, `None` when no target is stored
    pub fn request(&self, category: &str) -> Option<crate::models::UpdateCategoryArgs> {
        self.ingredient_name.as_ref().map(|name| crate::models::UpdateCategoryArgs {
            name: name.clone(),
            category: category.to_string(),
        })
    }
}

/// Recipe picked for reclassification (plain form submission)
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeReclassifyTarget {
    pub recipe_id: u32,
    pub recipe_name: String,
}

impl RecipeReclassifyTarget {
    pub fn title(&self) -> String {
        format!("Move {} to:", self.recipe_name)
    }
}

/// Finalise flow: `Idle -> Confirming -> Submitting -> Finalised`
///
/// `Finalised` is terminal; the page is navigating away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FinaliseState {
    #[default]
    Idle,
    Confirming,
    Submitting,
    Finalised,
}

impl FinaliseState {
    /// Trigger button: only opens the dialog
    pub fn open(self) -> Self {
        match self {
            FinaliseState::Idle => FinaliseState::Confirming,
            other => other,
        }
    }

    /// Dismiss the dialog. An in-flight submission cannot be cancelled.
    pub fn cancel(self) -> Self {
        match self {
            FinaliseState::Confirming => FinaliseState::Idle,
            other => other,
        }
    }

    /// Execute button. `None` unless the dialog is waiting for confirmation,
    /// which rules out a second submission while one is in flight.
    pub fn begin_submit(self) -> Option<Self> {
        match self {
            FinaliseState::Confirming => Some(FinaliseState::Submitting),
            _ => None,
        }
    }

    pub fn submit_failed(self) -> Self {
        match self {
            FinaliseState::Submitting => FinaliseState::Confirming,
            other => other,
        }
    }

    /// Success hides the dialog for good; navigation follows
    pub fn submit_succeeded(self) -> Self {
        match self {
            FinaliseState::Submitting => FinaliseState::Finalised,
            other => other,
        }
    }

    pub fn dialog_open(self) -> bool {
        matches!(self, FinaliseState::Confirming | FinaliseState::Submitting)
    }

    pub fn is_submitting(self) -> bool {
        self == FinaliseState::Submitting
    }
}

/// Which meal slot the search modal fills, and in which mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSession {
    pub target_slot: u32,
    pub favourites_only: bool,
}

impl SearchSession {
    pub fn new(target_slot: u32, favourites_only: bool) -> Self {
        Self { target_slot, favourites_only }
    }

    pub fn title(&self) -> &'static str {
        if self.favourites_only { "⭐ Your Favourites" } else { "🔍 Search Recipes" }
    }

    pub fn placeholder(&self) -> &'static str {
        if self.favourites_only { "Search within favourites..." } else { "Type a recipe name..." }
    }

    /// Query issued as soon as the modal opens, if any.
    /// Favourites are listed without waiting for a keystroke.
    pub fn initial_query(&self) -> Option<&'static str> {
        self.favourites_only.then_some("")
    }
}

/// Ticket handed out for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter used to drop responses superseded by a newer request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestSequence {
    issued: u64,
    discard_stale: bool,
}

impl RequestSequence {
    pub fn new(discard_stale: bool) -> Self {
        Self { issued: 0, discard_stale }
    }

    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Make every outstanding ticket stale
    pub fn invalidate(&mut self) {
        self.issued += 1;
    }

    /// Whether a response for `ticket` may still be rendered
    pub fn accepts(&self, ticket: Ticket) -> bool {
        !self.discard_stale || ticket.0 == self.issued
    }
}

/// Transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reclassify_last_open_wins() {
        let mut target = ReclassifyTarget::default();
        target.open("Kale".to_string());
        target.open("Cook's Salt".to_string());

        let request = target.request("Pantry").unwrap();
        assert_eq!(request.name, "Cook's Salt");
        assert_eq!(request.category, "Pantry");
        assert_eq!(target.title(), "Move: Cook's Salt");
    }

    #[test]
    fn test_reclassify_without_target_is_noop() {
        let mut target = ReclassifyTarget::default();
        assert!(target.request("Veg").is_none());

        target.open("Leek".to_string());
        target.close();
        assert!(!target.is_open());
        assert!(target.request("Veg").is_none());
    }

    #[test]
    fn test_reopen_clears_previous_error() {
        let mut target = ReclassifyTarget::default();
        target.open("Leek".to_string());
        target.error = Some("server responded with status 500".to_string());
        target.open("Leek".to_string());
        assert_eq!(target.error, None);
    }

    #[test]
    fn test_failure_marks_current_target() {
        let mut target = ReclassifyTarget::default();
        target.open("Leek".to_string());
        target.fail("Leek", "Category not allowed".to_string());
        assert!(target.is_open());
        assert_eq!(target.error.as_deref(), Some("Category not allowed"));
    }

    #[test]
    fn test_failure_for_previous_target_is_dropped() {
        let mut target = ReclassifyTarget::default();
        target.open("Leek".to_string());
        target.open("Kale".to_string());
        target.fail("Leek", "server responded with status 500".to_string());
        assert_eq!(target.name(), Some("Kale"));
        assert_eq!(target.error, None);

        target.close();
        target.fail("Kale", "server responded with status 500".to_string());
        assert_eq!(target.error, None);
    }

    #[test]
    fn test_finalise_happy_path() {
        let state = FinaliseState::Idle.open();
        assert_eq!(state, FinaliseState::Confirming);
        assert!(state.dialog_open());

        let state = state.begin_submit().unwrap();
        assert!(state.is_submitting());

        let state = state.submit_succeeded();
        assert_eq!(state, FinaliseState::Finalised);
        assert!(!state.dialog_open());
        assert_eq!(state.begin_submit(), None);

        // The trigger can't bring the execute button back
        let reopened = state.open();
        assert_eq!(reopened, FinaliseState::Finalised);
        assert!(!reopened.dialog_open());
        assert_eq!(reopened.begin_submit(), None);
        assert_eq!(reopened.cancel(), FinaliseState::Finalised);
    }

    #[test]
    fn test_finalise_blocks_double_submit() {
        let submitting = FinaliseState::Confirming.begin_submit().unwrap();
        assert_eq!(submitting.begin_submit(), None);
        assert_eq!(submitting.cancel(), FinaliseState::Submitting);
        assert_eq!(submitting.open(), FinaliseState::Submitting);
    }

    #[test]
    fn test_finalise_failure_returns_to_confirming() {
        let state = FinaliseState::Submitting.submit_failed();
        assert_eq!(state, FinaliseState::Confirming);
        assert!(state.dialog_open());
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn test_search_session_modes() {
        let favourites = SearchSession::new(3, true);
        assert_eq!(favourites.initial_query(), Some(""));
        assert_eq!(favourites.title(), "⭐ Your Favourites");

        let full = SearchSession::new(3, false);
        assert_eq!(full.initial_query(), None);
        assert_eq!(full.placeholder(), "Type a recipe name...");
    }

    #[test]
    fn test_sequence_discards_stale() {
        let mut seq = RequestSequence::new(true);
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.accepts(first));
        assert!(seq.accepts(second));

        seq.invalidate();
        assert!(!seq.accepts(second));
    }

    #[test]
    fn test_sequence_last_resolved_wins_when_disabled() {
        let mut seq = RequestSequence::new(false);
        let first = seq.issue();
        let _second = seq.issue();
        assert!(seq.accepts(first));
    }
}
