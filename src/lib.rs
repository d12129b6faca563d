pub mod boards;
pub mod cli;
pub mod error;
pub mod logging;
pub mod store;
pub mod tasks;
pub mod web;

#[cfg(test)]
pub mod test_utils;
