//! Page Bindings
//!
//! Hooks the server-rendered controls up to the planner context using
//! plain DOM listeners, and wraps the few browser side effects the flows
//! need (alert, navigation).

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::PlannerContext;
use crate::preferences;
use crate::scroll;

pub const ARCHITECT_BUTTONS: &str = ".architect-btn";
pub const PREVIEW_BUTTON: &str = "#previewBtn";
pub const FINALISE_BUTTON: &str = "#finaliseBtn";
pub const SEARCH_TRIGGERS: &str = ".search-trigger";
pub const RECIPE_RECLASSIFY_TRIGGERS: &str = ".recipe-reclassify-trigger";

/// Bind every page control. Call once after mount.
pub fn bind_all(ctx: PlannerContext) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("[PAGE] no document, controls left unbound");
        return;
    };

    bind_preference_mirrors(&document);
    on_each(&document, PREVIEW_BUTTON, move |_| ctx.preview_shopping_list());
    on_each(&document, FINALISE_BUTTON, move |_| ctx.open_finalise());
    bind_search_triggers(&document, ctx);
    bind_recipe_reclassify_triggers(&document, ctx);
    bind_scroll_persistence(&document, ctx.config().scroll_storage_key);
}

fn bind_preference_mirrors(document: &web_sys::Document) {
    let doc = document.clone();
    on_each(document, ARCHITECT_BUTTONS, move |button| {
        let prefs = preferences::read_global(&doc);
        match button.closest("form") {
            Ok(Some(form)) => {
                let written = preferences::mirror_into(&prefs, &form);
                log::debug!("[PREFS] mirrored {} field(s)", written);
            }
            _ => log::debug!("[PREFS] control is not inside a form"),
        }
    });
}

fn bind_search_triggers(document: &web_sys::Document, ctx: PlannerContext) {
    on_each(document, SEARCH_TRIGGERS, move |button| {
        match parse_search_trigger(button.get_attribute("data-slot"), button.get_attribute("data-fav")) {
            Some((slot, favourites_only)) => ctx.open_search(slot, favourites_only),
            None => log::warn!("[SEARCH] trigger without a valid data-slot"),
        }
    });
}

fn bind_recipe_reclassify_triggers(document: &web_sys::Document, ctx: PlannerContext) {
    on_each(document, RECIPE_RECLASSIFY_TRIGGERS, move |button| {
        let id = button.get_attribute("data-recipe-id").and_then(|id| id.trim().parse::<u32>().ok());
        match id {
            Some(id) => {
                let name = button.get_attribute("data-recipe-name").unwrap_or_default();
                ctx.open_recipe_reclassify(id, name);
            }
            None => log::warn!("[RECLASSIFY] recipe trigger without a valid data-recipe-id"),
        }
    });
}

fn bind_scroll_persistence(document: &web_sys::Document, key: String) {
    let Some(window) = web_sys::window() else { return };

    let save_key = key.clone();
    let on_unload = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        scroll::save(&save_key);
    });
    let _ = window.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref());
    on_unload.forget();

    // The bundle may start after `load` already fired
    if document.ready_state() == "complete" {
        scroll::restore(&key);
    } else {
        let on_load = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            scroll::restore(&key);
        });
        let _ = window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
        on_load.forget();
    }
}

/// Attach a click handler to every element matching `selector`. The handler
/// receives the element it was bound to.
fn on_each<F>(document: &web_sys::Document, selector: &str, handler: F)
where
    F: Fn(web_sys::Element) + Clone + 'static,
{
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("[PAGE] bad selector {}", selector);
        return;
    };
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let handler = handler.clone();
        let target = element.clone();
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            handler(target.clone());
        });
        let _ = element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
    log::debug!("[PAGE] bound {} x {}", nodes.length(), selector);
}

/// `data-slot` must be an integer; `data-fav` is true only when "true"
fn parse_search_trigger(slot: Option<String>, favourites: Option<String>) -> Option<(u32, bool)> {
    let slot = slot?.trim().parse::<u32>().ok()?;
    let favourites_only = favourites.as_deref() == Some("true");
    Some((slot, favourites_only))
}

/// Blocking alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Full-page navigation
pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            log::error!("[PAGE] navigation to {} failed: {:?}", href, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_trigger() {
        assert_eq!(parse_search_trigger(Some("2".into()), Some("true".into())), Some((2, true)));
        assert_eq!(parse_search_trigger(Some("0".into()), Some("false".into())), Some((0, false)));
        assert_eq!(parse_search_trigger(Some("4".into()), None), Some((4, false)));
    }

    #[test]
    fn test_parse_search_trigger_rejects_bad_slot() {
        assert_eq!(parse_search_trigger(None, Some("true".into())), None);
        assert_eq!(parse_search_trigger(Some("monday".into()), None), None);
        assert_eq!(parse_search_trigger(Some("-1".into()), None), None);
    }
}
