//! Page-level load contracts.
//!
//! Every page fetches through these loaders and renders the resulting
//! [`ViewState`]. Transport, status and "not found" failures all collapse
//! into [`ViewState::Empty`]: list pages show their empty state, detail
//! pages their "not found" card.

pub mod detail;
pub mod home;
pub mod list;
pub mod view_state;

pub use view_state::ViewState;
