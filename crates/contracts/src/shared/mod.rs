pub mod breadcrumbs;
pub mod flags;
pub mod grouping;
pub mod media;
pub mod request_sequence;
pub mod text;
