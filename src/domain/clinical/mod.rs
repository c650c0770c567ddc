pub mod assessment;
pub mod features;
