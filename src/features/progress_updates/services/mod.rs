mod progress_update_service;

pub use progress_update_service::*;
