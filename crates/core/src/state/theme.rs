//! Theme preference persistence.

use super::store::{PreferenceStore, StoreResult};
use df_protocol::Theme;

/// Key under which the theme is stored.
pub const THEME_KEY: &str = "theme";

/// Read the stored theme. Missing or unrecognised values fall back to dark.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Write `theme` to the store.
pub fn save_theme(store: &mut dyn PreferenceStore, theme: Theme) -> StoreResult<()> {
    store.set(THEME_KEY, theme.as_str())
}
