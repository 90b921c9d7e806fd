//! Wholesalers Marketplace core - shared types library.
//!
//! This crate provides common types used across the marketplace tooling:
//! - `client` - GraphQL API client for the remote backend
//! - `populate` - Bulk supplier/product provisioning pipeline
//! - `uploads` - Image upload HTTP service
//! - `cli` - Operational command-line tools
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated emails, the category catalog, provisioning
//!   candidates, and auth sessions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
