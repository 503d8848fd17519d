//! The Button Test Utils
//!
//! Provides shared testing utilities for the button event bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories that insert
//! event and claim rows, fixtures for in-memory entity models, and Serenity object factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_claims() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_button_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
