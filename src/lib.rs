//! Bloggin - a token-authenticated blogging platform backend
//!
//! This library provides the core functionality for the Bloggin API server.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
