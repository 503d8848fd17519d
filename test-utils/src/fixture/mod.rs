//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for unit tests
//! of conversion code and as default values.

pub mod button;

pub use button::{entity as button_entity, entity_builder as button_entity_builder};
