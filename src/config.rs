/// Base URL for the prediction backend.
///
/// During local development the backend runs on its own port; everywhere else
/// the app is served from the same origin and relative paths suffice.
pub fn get_backend_url() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(hostname) = window.location().hostname() {
            if hostname == "localhost" || hostname == "127.0.0.1" {
                return "http://localhost:5000".to_string();
            }
        }
    }
    String::new()
}
