//! Wine details page (MVVM):
//! - view_model.rs: load state and commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::WineDetails;
pub use view_model::WineDetailsViewModel;
