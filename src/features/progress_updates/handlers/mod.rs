mod progress_update_handler;

pub use progress_update_handler::*;
