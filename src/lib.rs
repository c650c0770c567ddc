pub mod application;
pub mod config;
pub mod domain;
#[cfg(feature = "ui")]
pub mod interfaces;
