pub mod ml;
pub mod session;
