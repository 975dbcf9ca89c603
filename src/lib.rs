pub mod config;
pub mod models;
pub mod portfolio;
pub mod selection;
pub mod snapshot;
#[cfg(test)]
pub mod test_helpers;
