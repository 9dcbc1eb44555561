mod progress_update_dto;

pub use progress_update_dto::*;
