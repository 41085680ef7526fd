//! Database layer
//!
//! Connection pool management, embedded schema migrations, and one
//! repository per entity.

pub mod migrations;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, create_test_pool};
