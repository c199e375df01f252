//! Browser LocalStorage access shared by config and high scores

/// Read a stored string, or `None` if storage is unavailable or the key is unset
pub fn read(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Store a string under `key`. Returns false if storage is unavailable or full.
pub fn write(key: &str, value: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .is_some_and(|storage| storage.set_item(key, value).is_ok())
}
