pub mod config;
pub mod error;
pub mod periods;
pub mod probe;
pub mod startup;
