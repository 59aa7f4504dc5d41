//! The Stoic reading library.
//!
//! Articles live in the local database: three seeded pieces plus
//! anything the user writes. Bodies are markdown; read time is computed
//! at save time.

pub mod picker;
pub mod seed;
pub mod storage;
pub mod types;

pub use picker::pick_article;
pub use storage::ArticleStorage;
pub use types::{compute_read_time, Article, Category};
