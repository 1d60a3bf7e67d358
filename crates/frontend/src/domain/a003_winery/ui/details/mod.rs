mod view;
mod view_model;

pub use view::WineryDetails;
pub use view_model::WineryDetailsViewModel;
