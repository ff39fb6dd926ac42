//! Repository Layer
//!
//! Blob persistence abstractions and the SQLite implementation.

mod db;
mod state_repo;
mod traits;


pub use db::SqliteStore;
pub use state_repo::StateRepository;
pub use traits::KeyValueStore;
