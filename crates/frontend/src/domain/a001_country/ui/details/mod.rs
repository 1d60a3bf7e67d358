mod view;
mod view_model;

pub use view::CountryDetails;
pub use view_model::CountryDetailsViewModel;
