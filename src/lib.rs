pub mod commands;
pub mod config;
pub mod copier;
pub mod staging;
