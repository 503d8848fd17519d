//! Business logic of the button event.
//!
//! - `counter` - Shared per-guild counter with quota-checked claims
//! - `game` - Per-guild session state machine, render loop and resend supervisor
//! - `antibot` - Rotating identity and layout of the claim buttons
//! - `display` - Display content and the renderer seam
//! - `manager` - Registry of live sessions injected into the bot
//! - `clock` - Wall clock and cancellable timers
//! - `notification` - Fire-and-forget claim announcements
//! - `eligibility` - Member checks before a claim

pub mod antibot;
pub mod clock;
pub mod counter;
pub mod display;
pub mod eligibility;
pub mod game;
pub mod manager;
pub mod notification;

#[cfg(test)]
mod test;
