//! Application State: zentrale Datenhaltung.

mod app_state;
mod interaction;

pub use app_state::AppState;
pub use interaction::InteractionState;
