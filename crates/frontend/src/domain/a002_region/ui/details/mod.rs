mod view;
mod view_model;

pub use view::RegionDetails;
pub use view_model::RegionDetailsViewModel;
