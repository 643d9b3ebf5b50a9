//! Session state and operations driven by a presentation layer.
//!
//! - `SaveSession`: tier, selected character, character and deck pools
//! - `simulate_save`: settle a session against its cap by dropping
//!   faint memories at random

pub mod simulate;
pub mod state;

pub use simulate::{is_faint_memory, simulate_save, SaveOutcome};
pub use state::SaveSession;
