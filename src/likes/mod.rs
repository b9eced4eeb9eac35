pub mod error;
pub mod handlers;
pub mod refdata;
pub mod stats;
pub mod types;

pub use error::ApiError;
pub use handlers::{decade_stats, sync_likes, top_genres, top_languages};
pub use refdata::RefTables;
