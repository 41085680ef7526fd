//! Repository layer
//!
//! One repository per entity. Each module provides a trait defining the data
//! access interface and a SQLx-backed implementation.

pub mod article;
pub mod category;
pub mod comment;
pub mod faq;
pub mod token;
pub mod user;

pub use article::{ArticleRepository, SqlxArticleRepository};
pub use category::{CategoryRepository, SqlxCategoryRepository};
pub use comment::{CommentRepository, SqlxCommentRepository};
pub use faq::{FaqRepository, SqlxFaqRepository};
pub use token::{SqlxTokenRepository, TokenRepository};
pub use user::{SqlxUserRepository, UserRepository};
