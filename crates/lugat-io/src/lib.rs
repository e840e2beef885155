pub mod audio;

pub use audio::{AudioError, AudioOutput};
