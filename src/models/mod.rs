//! Data models for the Bloggin platform

pub mod article;
pub mod category;
pub mod comment;
pub mod faq;
pub mod token;
pub mod user;

pub use article::{Article, NewArticle};
pub use category::Category;
pub use comment::Comment;
pub use faq::{Faq, NewFaq};
pub use token::Token;
pub use user::User;
