/// Base URL of the collections API, or `None` when no backend is wired up.
///
/// `BACKEND_URL` is read at compile time. Release builds without it assume the
/// backend also serves the bundle and use the page origin; debug builds without
/// it run disconnected.
pub fn get_backend_url() -> Option<String> {
    if let Some(url) = option_env!("BACKEND_URL") {
        let url = url.trim().trim_end_matches('/');
        if !url.is_empty() {
            return Some(url.to_string());
        }
    }
    if cfg!(debug_assertions) {
        return None;
    }
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .filter(|origin| !origin.is_empty() && origin != "null")
}
