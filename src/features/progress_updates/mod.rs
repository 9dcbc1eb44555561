//! Progress updates reported by users while following a learning plan.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/progress-updates/create` | No | Record a progress update |
//! | GET | `/api/progress-updates/user/{userId}` | No | List a user's progress updates |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgProgressUpdateRepository;
pub use services::ProgressUpdateService;
