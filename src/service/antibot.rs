//! Rotating button identity.
//!
//! Four claim buttons are rendered with the same label, but only the one at the current slot
//! carries the real claim id and is enabled. The "count my diamonds" button is inserted at the
//! slot position, and the label digits switch between four look-alike unicode digit sets, so
//! neither the coordinates nor the text of the real button are stable for a script to target.
//!
//! The slot is process-local and re-rolled every minute; losing it on restart is harmless.

use rand::Rng;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::{model::session::GameState, util::format::format_score};

/// Number of claim buttons, one of which is real.
pub const CLAIM_BUTTON_COUNT: u8 = 4;

pub const CLAIM_BUTTON_ID: &str = "the_button";

/// Decoy ids are this prefix followed by the button index.
pub const DECOY_BUTTON_ID_PREFIX: &str = "the_button_antibot_";

pub const READ_SCORE_BUTTON_ID: &str = "read_my_score";

pub const DEFAULT_EMOJI: &str = "💎";

const READ_SCORE_LABEL: &str = "Count my diamonds";

/// First code point of the digit `0` in each slot's digit set.
const DIGIT_BASES: [u32; CLAIM_BUTTON_COUNT as usize] = [
    0x1D7CE, // mathematical bold
    0x1D7E2, // mathematical sans-serif
    0x1D7EC, // mathematical sans-serif bold
    0x1D7F6, // mathematical monospace
];

/// Per-session holder of the current antibot slot.
pub struct AntibotSelector {
    slot: AtomicU8,
}

impl AntibotSelector {
    /// Creates a selector starting at a random slot.
    pub fn new() -> Self {
        Self::with_slot(rand::rng().random_range(0..CLAIM_BUTTON_COUNT))
    }

    /// Creates a selector starting at a given slot, wrapped into range.
    pub fn with_slot(slot: u8) -> Self {
        Self {
            slot: AtomicU8::new(slot % CLAIM_BUTTON_COUNT),
        }
    }

    pub fn current(&self) -> u8 {
        self.slot.load(Ordering::Relaxed)
    }

    /// Picks a new slot uniformly at random and returns it.
    pub fn reroll(&self) -> u8 {
        let slot = rand::rng().random_range(0..CLAIM_BUTTON_COUNT);
        self.slot.store(slot, Ordering::Relaxed);
        slot
    }
}

impl Default for AntibotSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Button colour, independent of any Discord type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Danger,
    Primary,
    Secondary,
    Success,
}

impl ButtonTone {
    /// Colour shared by all claim buttons for a slot.
    pub fn for_slot(slot: u8) -> Self {
        match slot {
            1 => ButtonTone::Primary,
            2 => ButtonTone::Secondary,
            3 => ButtonTone::Success,
            _ => ButtonTone::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// The one functional claim button.
    Claim,
    /// Look-alike claim button that never claims.
    Decoy,
    /// Opens the member's score summary.
    ReadScore,
}

/// Renderer-agnostic description of one button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDescriptor {
    pub custom_id: String,
    pub label: String,
    pub emoji: Option<String>,
    pub tone: ButtonTone,
    pub disabled: bool,
    pub kind: ButtonKind,
}

/// Lays out the five buttons of the display.
///
/// # Arguments
/// - `slot` - Current antibot slot in `0..4`
/// - `state` - Session state; claim buttons are only enabled while started and the score
///   button is disabled only while waiting
/// - `value` - Counter value shown on the claim buttons
/// - `emoji` - Custom emoji ID or unicode emoji for the claim buttons
///
/// # Returns
/// - `Vec<ButtonDescriptor>` - Four claim descriptors with the score descriptor inserted at
///   index `slot`
pub fn layout_buttons(slot: u8, state: GameState, value: i64, emoji: &str) -> Vec<ButtonDescriptor> {
    let slot = slot % CLAIM_BUTTON_COUNT;
    let label = disguise_digits(&format_score(value), slot);
    let tone = ButtonTone::for_slot(slot);
    let started = state == GameState::Started;

    let mut buttons: Vec<ButtonDescriptor> = (0..CLAIM_BUTTON_COUNT)
        .map(|index| {
            let is_real = index == slot;
            ButtonDescriptor {
                custom_id: if is_real {
                    CLAIM_BUTTON_ID.to_string()
                } else {
                    format!("{}{}", DECOY_BUTTON_ID_PREFIX, index)
                },
                label: label.clone(),
                emoji: Some(emoji.to_string()),
                tone,
                disabled: !started || !is_real,
                kind: if is_real {
                    ButtonKind::Claim
                } else {
                    ButtonKind::Decoy
                },
            }
        })
        .collect();

    buttons.insert(
        slot as usize,
        ButtonDescriptor {
            custom_id: READ_SCORE_BUTTON_ID.to_string(),
            label: READ_SCORE_LABEL.to_string(),
            emoji: None,
            tone: ButtonTone::Secondary,
            disabled: state == GameState::Waiting,
            kind: ButtonKind::ReadScore,
        },
    );

    buttons
}

/// Replaces ASCII digits with the look-alike digit set of a slot.
pub fn disguise_digits(text: &str, slot: u8) -> String {
    let base = DIGIT_BASES[(slot % CLAIM_BUTTON_COUNT) as usize];

    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => char::from_u32(base + digit).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Classifies a component custom id.
pub fn button_kind(custom_id: &str) -> Option<ButtonKind> {
    if custom_id == CLAIM_BUTTON_ID {
        Some(ButtonKind::Claim)
    } else if custom_id == READ_SCORE_BUTTON_ID {
        Some(ButtonKind::ReadScore)
    } else if custom_id.starts_with(DECOY_BUTTON_ID_PREFIX) {
        Some(ButtonKind::Decoy)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim_buttons(buttons: &[ButtonDescriptor]) -> Vec<&ButtonDescriptor> {
        buttons
            .iter()
            .filter(|b| b.kind != ButtonKind::ReadScore)
            .collect()
    }

    #[test]
    fn exactly_one_claim_button_enabled_at_slot() {
        for slot in 0..CLAIM_BUTTON_COUNT {
            let buttons = layout_buttons(slot, GameState::Started, 12, DEFAULT_EMOJI);
            let claims = claim_buttons(&buttons);

            let enabled: Vec<usize> = claims
                .iter()
                .enumerate()
                .filter(|(_, b)| !b.disabled)
                .map(|(index, _)| index)
                .collect();

            assert_eq!(claims.len(), 4);
            assert_eq!(enabled, vec![slot as usize]);
            assert_eq!(claims[slot as usize].custom_id, CLAIM_BUTTON_ID);
        }
    }

    #[test]
    fn score_button_inserted_at_slot() {
        for slot in 0..CLAIM_BUTTON_COUNT {
            let buttons = layout_buttons(slot, GameState::Started, 0, DEFAULT_EMOJI);

            assert_eq!(buttons.len(), 5);
            assert_eq!(buttons[slot as usize].custom_id, READ_SCORE_BUTTON_ID);
        }
    }

    #[test]
    fn decoys_have_distinct_ids() {
        let buttons = layout_buttons(2, GameState::Started, 5, DEFAULT_EMOJI);
        let mut ids: Vec<&str> = buttons.iter().map(|b| b.custom_id.as_str()).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 5);
        assert!(buttons
            .iter()
            .filter(|b| b.kind == ButtonKind::Decoy)
            .all(|b| b.custom_id.starts_with(DECOY_BUTTON_ID_PREFIX)));
    }

    #[test]
    fn waiting_disables_everything() {
        let buttons = layout_buttons(1, GameState::Waiting, 0, DEFAULT_EMOJI);

        assert!(buttons.iter().all(|b| b.disabled));
    }

    #[test]
    fn ended_keeps_score_button_enabled() {
        let buttons = layout_buttons(3, GameState::Ended, 40, DEFAULT_EMOJI);

        for button in &buttons {
            match button.kind {
                ButtonKind::ReadScore => assert!(!button.disabled),
                _ => assert!(button.disabled),
            }
        }
    }

    #[test]
    fn claim_buttons_share_slot_tone_and_emoji() {
        let buttons = layout_buttons(3, GameState::Started, 7, "885221354834636810");

        for button in claim_buttons(&buttons) {
            assert_eq!(button.tone, ButtonTone::Success);
            assert_eq!(button.emoji.as_deref(), Some("885221354834636810"));
        }
    }

    #[test]
    fn digits_use_slot_digit_set() {
        assert_eq!(disguise_digits("10 diamonds", 0), "𝟏𝟎 diamonds");
        assert_eq!(disguise_digits("10 diamonds", 1), "𝟣𝟢 diamonds");
        assert_eq!(disguise_digits("10 diamonds", 2), "𝟭𝟬 diamonds");
        assert_eq!(disguise_digits("10 diamonds", 3), "𝟷𝟶 diamonds");
    }

    #[test]
    fn classifies_custom_ids() {
        assert_eq!(button_kind("the_button"), Some(ButtonKind::Claim));
        assert_eq!(button_kind("the_button_antibot_2"), Some(ButtonKind::Decoy));
        assert_eq!(button_kind("read_my_score"), Some(ButtonKind::ReadScore));
        assert_eq!(button_kind("something_else"), None);
    }

    #[test]
    fn reroll_stays_in_range() {
        let selector = AntibotSelector::with_slot(6);
        assert_eq!(selector.current(), 2);

        for _ in 0..50 {
            assert!(selector.reroll() < CLAIM_BUTTON_COUNT);
        }
    }
}
