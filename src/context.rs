//! Planner Context
//!
//! Copyable handle to the store, config and request sequences, provided via
//! the Leptos Context API. Every user-facing operation lives here so page
//! bindings and components trigger the same code paths.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::PlannerConfig;
use crate::models::UpdateCategoryArgs;
use crate::page;
use crate::search::SearchView;
use crate::session::{RecipeReclassifyTarget, RequestSequence, SearchSession, Toast};
use crate::shopping::{ShoppingListView, ShoppingPreview};
use crate::store::{PlannerState, PlannerStateStoreFields, PlannerStore};

#[derive(Clone, Copy)]
pub struct PlannerContext {
    pub store: PlannerStore,
    config: StoredValue<PlannerConfig>,
    shopping_seq: StoredValue<RequestSequence>,
    search_seq: StoredValue<RequestSequence>,
    toast_seq: StoredValue<u64>,
}

impl PlannerContext {
    pub fn new(config: PlannerConfig) -> Self {
        let discard_stale = config.discard_stale_responses;
        Self {
            store: PlannerStore::new(PlannerState::default()),
            config: StoredValue::new(config),
            shopping_seq: StoredValue::new(RequestSequence::new(discard_stale)),
            search_seq: StoredValue::new(RequestSequence::new(discard_stale)),
            toast_seq: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> PlannerConfig {
        self.config.get_value()
    }

    // ========================
    // Shopping List
    // ========================

    /// Load and render the grouped shopping list. Re-entrant: a newer
    /// click supersedes any preview still in flight.
    pub fn preview_shopping_list(&self) {
        let Some(ticket) = self.shopping_seq.try_update_value(|seq| seq.issue()) else { return };
        let url = self.config.with_value(|c| c.endpoints.shopping_list_preview.clone());
        let store = self.store;
        let seq = self.shopping_seq;

        store.shopping().set(ShoppingPreview::Loading);
        spawn_local(async move {
            let result = commands::fetch_shopping_list(&url).await;
            if !seq.with_value(|s| s.accepts(ticket)) {
                log::debug!("[SHOPPING] dropping superseded preview response");
                return;
            }
            match result {
                Ok(list) => {
                    let view = ShoppingListView::from_response(&list);
                    log::info!("[SHOPPING] rendered {} rows", view.rows.len());
                    store.shopping().set(ShoppingPreview::Rendered(view));
                }
                Err(e) => {
                    log::error!("[SHOPPING] preview failed: {}", e);
                    store.shopping().set(ShoppingPreview::Error);
                }
            }
        });
    }

    pub fn close_shopping_list(&self) {
        self.shopping_seq.update_value(|seq| seq.invalidate());
        self.store.shopping().set(ShoppingPreview::Idle);
    }

    // ========================
    // Reclassification
    // ========================

    pub fn open_reclassify_picker(&self, name: String) {
        log::debug!("[RECLASSIFY] picker opened for {:?}", name);
        self.store.reclassify().update(|target| target.open(name));
    }

    pub fn close_reclassify_picker(&self) {
        self.store.reclassify().update(|target| target.close());
    }

    /// Send one category update for the stored target. On success the
    /// picker closes and the shopping list is reloaded.
    pub fn confirm_reclassify(&self, category: String) {
        let Some(args) = self.store.reclassify().with_untracked(|t| t.request(&category)) else {
            log::warn!("[RECLASSIFY] confirm without a target, ignoring");
            return;
        };
        let url = self.config.with_value(|c| c.endpoints.update_ingredient_category.clone());
        let ctx = *self;

        spawn_local(async move {
            match commands::update_ingredient_category(&url, &args).await {
                Ok(()) => {
                    log::info!("[RECLASSIFY] {} -> {}", args.name, args.category);
                    let toast = ctx.reclassify_applied(&args);
                    ctx.schedule_toast_dismiss(toast);
                    ctx.preview_shopping_list();
                }
                Err(e) => {
                    log::warn!("[RECLASSIFY] update for {} failed: {}", args.name, e);
                    ctx.reclassify_failed(&args.name, e.to_string());
                }
            }
        });
    }

    /// Close the picker and announce the move. Returns the toast id.
    fn reclassify_applied(&self, args: &UpdateCategoryArgs) -> u64 {
        self.store.reclassify().update(|target| target.close());
        self.push_toast(format!("{} moved to {}", args.name, args.category))
    }

    fn reclassify_failed(&self, name: &str, message: String) {
        self.store.reclassify().update(|target| target.fail(name, message));
    }

    pub fn open_recipe_reclassify(&self, recipe_id: u32, recipe_name: String) {
        self.store
            .recipe_reclassify()
            .set(Some(RecipeReclassifyTarget { recipe_id, recipe_name }));
    }

    pub fn close_recipe_reclassify(&self) {
        self.store.recipe_reclassify().set(None);
    }

    // ========================
    // Finalise
    // ========================

    pub fn open_finalise(&self) {
        self.store.finalise().update(|state| *state = state.open());
    }

    pub fn cancel_finalise(&self) {
        self.store.finalise().update(|state| *state = state.cancel());
    }

    /// Submit the plan. The state machine refuses a second submission while
    /// one is in flight.
    pub fn execute_finalise(&self) {
        let Some(next) = self.store.finalise().get_untracked().begin_submit() else {
            log::debug!("[FINALISE] execute ignored, not confirming");
            return;
        };
        self.store.finalise().set(next);

        let (url, current_plan) = self
            .config
            .with_value(|c| (c.endpoints.finalise_plan.clone(), c.endpoints.current_plan.clone()));
        let store = self.store;

        spawn_local(async move {
            match commands::finalise_plan(&url).await {
                Ok(()) => {
                    log::info!("[FINALISE] plan finalised, leaving for {}", current_plan);
                    store.finalise().update(|state| *state = state.submit_succeeded());
                    page::navigate(&current_plan);
                }
                Err(e) => {
                    log::warn!("[FINALISE] failed: {}", e);
                    page::alert(&format!("Error: {}", e));
                    store.finalise().update(|state| *state = state.submit_failed());
                }
            }
        });
    }

    // ========================
    // Recipe Search
    // ========================

    /// Open the search modal for `slot`. Favourites mode lists favourites
    /// straight away.
    pub fn open_search(&self, slot: u32, favourites_only: bool) {
        let session = SearchSession::new(slot, favourites_only);
        log::debug!("[SEARCH] opening for slot {} (favourites: {})", slot, favourites_only);

        // Results for a previous session must not land in this one
        self.search_seq.update_value(|seq| seq.invalidate());
        self.store.search_session().set(session);
        self.store.search_query().set(String::new());
        self.store.search().set(SearchView::Prompt);
        self.store.search_open().set(true);

        if let Some(query) = session.initial_query() {
            self.perform_search(query.to_string());
        }
    }

    pub fn close_search(&self) {
        self.search_seq.update_value(|seq| seq.invalidate());
        self.store.search_open().set(false);
    }

    /// One request per call; no debounce.
    pub fn perform_search(&self, query: String) {
        let Some(ticket) = self.search_seq.try_update_value(|seq| seq.issue()) else { return };
        let session = self.store.search_session().get_untracked();
        let (base, select_prefix) = self
            .config
            .with_value(|c| (c.endpoints.search_recipes.clone(), c.endpoints.select_recipe.clone()));
        let store = self.store;
        let seq = self.search_seq;

        spawn_local(async move {
            let result = commands::search_recipes(&base, &query, session.favourites_only).await;
            if !seq.with_value(|s| s.accepts(ticket)) {
                log::debug!("[SEARCH] dropping stale results for {:?}", query);
                return;
            }
            let view = match result {
                Ok(recipes) => SearchView::from_results(session, &select_prefix, &recipes),
                Err(e) => {
                    log::error!("[SEARCH] query {:?} failed: {}", query, e);
                    SearchView::Error
                }
            };
            store.search().set(view);
        });
    }

    // ========================
    // Toast
    // ========================

    /// Show a notification that hides itself after the configured delay
    pub fn show_toast(&self, message: String) {
        let id = self.push_toast(message);
        self.schedule_toast_dismiss(id);
    }

    fn push_toast(&self, message: String) -> u64 {
        let id = self.toast_seq.try_update_value(|n| {
            *n += 1;
            *n
        });
        let id = id.unwrap_or_default();
        self.store.toast().set(Some(Toast { id, message }));
        id
    }

    fn schedule_toast_dismiss(&self, id: u64) {
        let delay = self.config.with_value(|c| c.toast_duration_ms);
        let store = self.store;

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            // Only clear our own toast, a newer one keeps its full duration
            if store.toast().with_untracked(|t| t.as_ref().map(|t| t.id)) == Some(id) {
                store.toast().set(None);
            }
        });
    }

    pub fn dismiss_toast(&self) {
        self.store.toast().set(None);
    }
}

/// Get the planner context
pub fn use_planner() -> PlannerContext {
    expect_context::<PlannerContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FinaliseState;

    fn context() -> (Owner, PlannerContext) {
        let owner = Owner::new();
        owner.set();
        (owner, PlannerContext::new(PlannerConfig::default()))
    }

    #[test]
    fn test_open_search_resets_session() {
        let (_owner, ctx) = context();
        ctx.store.search_query().set("lasagne".to_string());
        ctx.store.search().set(SearchView::NoResults);

        ctx.open_search(3, false);

        assert_eq!(ctx.store.search_session().get_untracked(), SearchSession::new(3, false));
        assert_eq!(ctx.store.search_query().get_untracked(), "");
        assert_eq!(ctx.store.search().get_untracked(), SearchView::Prompt);
        assert!(ctx.store.search_open().get_untracked());

        ctx.close_search();
        assert!(!ctx.store.search_open().get_untracked());
    }

    #[test]
    fn test_picker_keeps_last_opened_target() {
        let (_owner, ctx) = context();
        ctx.open_reclassify_picker("Kale".to_string());
        ctx.open_reclassify_picker("Cook's Salt".to_string());

        let request = ctx.store.reclassify().with_untracked(|t| t.request("Pantry")).unwrap();
        assert_eq!(request.name, "Cook's Salt");

        ctx.close_reclassify_picker();
        assert!(!ctx.store.reclassify().with_untracked(|t| t.is_open()));
    }

    #[test]
    fn test_confirm_without_target_does_nothing() {
        let (_owner, ctx) = context();
        ctx.confirm_reclassify("Veg".to_string());
        assert!(!ctx.store.reclassify().with_untracked(|t| t.is_open()));
    }

    #[test]
    fn test_reclassify_success_closes_picker_with_toast() {
        let (_owner, ctx) = context();
        ctx.open_reclassify_picker("Leek".to_string());
        let args = ctx.store.reclassify().with_untracked(|t| t.request("Veg")).unwrap();

        let id = ctx.reclassify_applied(&args);

        assert!(!ctx.store.reclassify().with_untracked(|t| t.is_open()));
        assert_eq!(
            ctx.store.toast().get_untracked(),
            Some(Toast { id, message: "Leek moved to Veg".to_string() })
        );
    }

    #[test]
    fn test_reclassify_failure_keeps_picker_open() {
        let (_owner, ctx) = context();
        ctx.open_reclassify_picker("Leek".to_string());

        ctx.reclassify_failed("Leek", "Category not allowed".to_string());
        assert!(ctx.store.reclassify().with_untracked(|t| t.is_open()));
        assert_eq!(
            ctx.store.reclassify().with_untracked(|t| t.error.clone()),
            Some("Category not allowed".to_string())
        );

        // A late failure for an earlier ingredient doesn't touch the new one
        ctx.open_reclassify_picker("Kale".to_string());
        ctx.reclassify_failed("Leek", "server responded with status 500".to_string());
        assert_eq!(ctx.store.reclassify().with_untracked(|t| t.error.clone()), None);
        assert_eq!(ctx.store.toast().get_untracked(), None);
    }

    #[test]
    fn test_finalise_dialog_open_and_cancel() {
        let (_owner, ctx) = context();
        ctx.open_finalise();
        assert_eq!(ctx.store.finalise().get_untracked(), FinaliseState::Confirming);

        ctx.cancel_finalise();
        assert_eq!(ctx.store.finalise().get_untracked(), FinaliseState::Idle);

        // Execute is only reachable from the open dialog
        ctx.execute_finalise();
        assert_eq!(ctx.store.finalise().get_untracked(), FinaliseState::Idle);
    }

    #[test]
    fn test_recipe_reclassify_target() {
        let (_owner, ctx) = context();
        ctx.open_recipe_reclassify(9, "Dal".to_string());
        assert_eq!(
            ctx.store.recipe_reclassify().get_untracked().map(|t| t.title()),
            Some("Move Dal to:".to_string())
        );

        ctx.close_recipe_reclassify();
        assert_eq!(ctx.store.recipe_reclassify().get_untracked(), None);
    }
}
