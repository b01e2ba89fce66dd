//! Per-table column visibility, persisted in `localStorage`.
//!
//! Tables that pass a storage key remember which columns the user hid;
//! tables without one always start from the column defaults.

use std::collections::HashSet;

/// Merge a stored preference with the table's column defaults.
///
/// Keys that no longer exist in the column set are dropped (the table
/// schema changed since the preference was written); with no stored
/// preference the `show_by_default` flags win.
pub fn resolve_visible(
    defaults: &[(&'static str, bool)],
    stored: Option<Vec<String>>,
) -> HashSet<String> {
    match stored {
        Some(keys) => {
            let known: HashSet<&str> = defaults.iter().map(|(k, _)| *k).collect();
            keys.into_iter()
                .filter(|k| known.contains(k.as_str()))
                .collect()
        }
        None => defaults
            .iter()
            .filter(|(_, show)| *show)
            .map(|(k, _)| k.to_string())
            .collect(),
    }
}

/// Stored representation: visible keys in column order, so the round-trip
/// is stable.
pub fn to_stored(defaults: &[(&'static str, bool)], visible: &HashSet<String>) -> Vec<String> {
    defaults
        .iter()
        .map(|(k, _)| *k)
        .filter(|k| visible.contains(*k))
        .map(str::to_string)
        .collect()
}

pub fn load(storage_key: &str) -> Option<Vec<String>> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(storage_key).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn store(storage_key: &str, keys: &[String]) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    if let Ok(raw) = serde_json::to_string(keys) {
        let _ = storage.set_item(storage_key, &raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: &[(&'static str, bool)] = &[
        ("name", true),
        ("code", true),
        ("region", false),
        ("phone", true),
    ];

    #[test]
    fn no_preference_uses_show_by_default() {
        let visible = resolve_visible(DEFAULTS, None);
        assert!(visible.contains("name"));
        assert!(visible.contains("code"));
        assert!(visible.contains("phone"));
        assert!(!visible.contains("region"));
    }

    #[test]
    fn hide_then_restore_round_trips_exactly() {
        let mut visible = resolve_visible(DEFAULTS, None);
        visible.remove("code");

        let stored = to_stored(DEFAULTS, &visible);
        let restored = resolve_visible(DEFAULTS, Some(stored));
        assert_eq!(visible, restored);
    }

    #[test]
    fn stale_keys_from_old_schema_are_dropped() {
        let stored = vec!["name".to_string(), "deleted_column".to_string()];
        let visible = resolve_visible(DEFAULTS, Some(stored));
        assert!(visible.contains("name"));
        assert!(!visible.contains("deleted_column"));
    }
}
