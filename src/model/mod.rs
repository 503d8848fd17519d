//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data-layer boundary so
//! services work with parsed Discord ids instead of the stored string snowflakes.

pub mod claim;
pub mod session;
