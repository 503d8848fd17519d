//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_member;
//!
//! let booster = create_test_member(1, 42, Some("2024-01-01T00:00:00Z"), Some("2023-01-01T00:00:00Z"));
//! assert!(booster.premium_since.is_some());
//! ```

pub mod member;

pub use member::create_test_member;
