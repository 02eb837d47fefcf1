use gloo::console;

/// Component-tagged console logger. The browser console is the only log
/// sink this application has; there is no backend to ship logs to.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::prefix(component), message.to_string());
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::prefix(component), message.to_string());
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::prefix(component), message.to_string());
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::prefix(component), message.to_string());
    }

    fn prefix(component: &str) -> String {
        format!("[{}]", component)
    }
}
