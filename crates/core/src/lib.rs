//! CustomKeeps Core - Pricing domain and shared types.
//!
//! This crate provides the order-pricing pipeline and common types used
//! across all CustomKeeps components:
//! - `api` - Public catalog/checkout JSON API
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and arithmetic - no I/O, no database
//! access, no HTTP clients. Product lookup and payment are collaborators that
//! live in the `api` crate; everything here is deterministic and synchronous.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the catalog product model
//! - [`pricing`] - Tier discounts, rounding, shipping, and quote assembly

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use pricing::*;
pub use types::*;
