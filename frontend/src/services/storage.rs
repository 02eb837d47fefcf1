use gloo::storage::{LocalStorage, Storage};
use shared::InterestSelection;

use super::logging::Logger;

/// The only persisted browser-local key: a JSON array of interest strings.
pub const INTERESTS_KEY: &str = "citizen.interests";

/// Saved selection when one exists and parses, otherwise the defaults.
pub fn load_interests() -> InterestSelection {
    match LocalStorage::get::<InterestSelection>(INTERESTS_KEY) {
        Ok(selection) => selection,
        Err(_) => InterestSelection::with_defaults(),
    }
}

pub fn save_interests(selection: &InterestSelection) -> Result<(), String> {
    LocalStorage::set(INTERESTS_KEY, selection).map_err(|e| {
        let message = format!("Failed to persist interests: {}", e);
        Logger::error_with_component("storage", &message);
        message
    })
}
