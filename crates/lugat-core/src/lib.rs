pub mod audio;
pub mod fetch;
pub mod lookup;
pub mod prefs;
pub mod render;
pub mod search;
pub mod view_model;

pub use audio::{AudioPlayer, PlaybackState};
pub use fetch::{FetchCoordinator, LookupTicket, run_lookup};
pub use lookup::LookupState;
pub use prefs::Preferences;
pub use search::SearchController;
pub use view_model::{Effect, WordLookupView};
