//! Business logic services
//!
//! Each service wraps one or more repositories and owns the error taxonomy
//! for its operations.

pub mod article;
pub mod auth;
pub mod category;
pub mod comment;
pub mod faq;
pub mod password;

pub use article::{ArticleService, ArticleServiceError};
pub use auth::{AuthService, AuthServiceError};
pub use category::{CategoryService, CategoryServiceError};
pub use comment::{CommentService, CommentServiceError};
pub use faq::{FaqService, FaqServiceError};
