//! Preference Mirror
//!
//! Copies the page-level max time / max calories inputs into the hidden
//! fields of the form whose "apply globally" control was clicked.

use wasm_bindgen::JsCast;

pub const GLOBAL_MAX_TIME: &str = r#"input[name="global_max_time"]"#;
pub const GLOBAL_MAX_CAL: &str = r#"input[name="global_max_cal"]"#;
pub const TIME_MIRROR: &str = ".pref-time-mirror";
pub const CAL_MIRROR: &str = ".pref-cal-mirror";

/// Raw values of the global inputs, copied without validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalPreferences {
    pub max_time: String,
    pub max_cal: String,
}

/// Anything that can write a value into a field found by selector
pub trait MirrorFields {
    /// Returns false when no such field exists
    fn set_field(&self, selector: &str, value: &str) -> bool;
}

/// Write both values into `form`. Returns how many fields were written.
pub fn mirror_into<F: MirrorFields + ?Sized>(prefs: &GlobalPreferences, form: &F) -> usize {
    [(TIME_MIRROR, &prefs.max_time), (CAL_MIRROR, &prefs.max_cal)]
        .into_iter()
        .map(|(selector, value)| form.set_field(selector, value))
        .filter(|written| *written)
        .count()
}

impl MirrorFields for web_sys::Element {
    fn set_field(&self, selector: &str, value: &str) -> bool {
        match self.query_selector(selector) {
            Ok(Some(field)) => match field.dyn_into::<web_sys::HtmlInputElement>() {
                Ok(input) => {
                    input.set_value(value);
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

/// Read the global inputs; a missing input reads as empty
pub fn read_global(document: &web_sys::Document) -> GlobalPreferences {
    let read = |selector: &str| {
        document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    };
    GlobalPreferences {
        max_time: read(GLOBAL_MAX_TIME),
        max_cal: read(GLOBAL_MAX_CAL),
    }
}
