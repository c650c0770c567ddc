pub mod clinical;
pub mod errors;
pub mod ml;
