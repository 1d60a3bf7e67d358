mod view;
mod view_model;

pub use view::GrapeDetails;
pub use view_model::GrapeDetailsViewModel;
