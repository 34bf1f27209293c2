pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod store;
pub mod task;

#[cfg(test)]
pub mod test_helpers;
