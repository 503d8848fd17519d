//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let button = factory::button::create_button(&db).await?;
//! let claim = factory::user_score::create_user_score(&db, &button.guild_id, "42", 7).await?;
//! ```
//!
//! # Available Factories
//!
//! - `button` - Create event rows (one per guild)
//! - `user_score` - Create claim rows
//! - `helpers` - ID generation and multi-row helpers

pub mod button;
pub mod helpers;
pub mod user_score;

pub use button::create_button;
pub use user_score::create_user_score;
