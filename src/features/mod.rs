pub mod progress_updates;
