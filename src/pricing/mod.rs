#[cfg(feature = "serde")]
pub mod batch;
#[cfg(feature = "serde")]
pub mod config;
pub mod types;
