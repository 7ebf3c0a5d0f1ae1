//! Shortlink Redirector
//!
//! Takes the last segment of a page path as a short name, looks it up in a
//! link backend, counts the click without waiting for it, and redirects.
//! Anything other than a hit ends on the same "Invalid or expired link" page.
//!
//! # Features
//! - **server**: HTTP server mode (default)
//! - **cli**: Command-line interface
//!
//! # Architecture
//! - `redirector`: The redirect workflow
//! - `backend`: Link backend trait plus HTTP and in-memory implementations
//! - `page`: Page boundary (pathname, navigation, element markup)
//! - `api`: HTTP services and middleware
//! - `interfaces`: CLI commands
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging

pub mod api;
pub mod backend;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod page;
pub mod redirector;
pub mod runtime;
pub mod system;
