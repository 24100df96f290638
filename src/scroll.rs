//! Scroll Continuity
//!
//! Saves the vertical scroll offset to localStorage before unload and
//! restores it once on the next load. Best effort: any storage failure is
//! ignored.

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Write the current offset under `key`
pub fn save(key: &str) {
    let Some(window) = web_sys::window() else { return };
    let Ok(offset) = window.scroll_y() else { return };
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, &offset.to_string());
    }
}

/// Consume the stored offset and scroll to it
pub fn restore(key: &str) {
    let Some(offset) = take(key) else { return };
    if let Some(window) = web_sys::window() {
        log::debug!("[SCROLL] restoring offset {}", offset);
        window.scroll_to_with_x_and_y(0.0, offset);
    }
}

/// Read and erase the stored value; `None` when absent or unparsable
fn take(key: &str) -> Option<f64> {
    let storage = storage()?;
    let raw = storage.get_item(key).ok()??;
    let _ = storage.remove_item(key);
    parse_offset(&raw)
}

fn parse_offset(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|offset| offset.is_finite() && *offset >= 0.0)
        .map(f64::trunc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("640"), Some(640.0));
        assert_eq!(parse_offset("512.75"), Some(512.0));
        assert_eq!(parse_offset("0"), Some(0.0));
        assert_eq!(parse_offset(" 88 "), Some(88.0));
    }

    #[test]
    fn test_parse_offset_rejects_garbage() {
        assert_eq!(parse_offset(""), None);
        assert_eq!(parse_offset("top"), None);
        assert_eq!(parse_offset("-20"), None);
        assert_eq!(parse_offset("NaN"), None);
    }
}
