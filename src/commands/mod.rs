//! Command implementations

pub mod classic;

pub use classic::run_classic;
