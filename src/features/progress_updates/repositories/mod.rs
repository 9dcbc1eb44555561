#[cfg(test)]
pub mod in_memory;
mod progress_update_repository;

pub use progress_update_repository::*;
