mod progress_update;

pub use progress_update::*;
