//! Observation encoding for network input.

use super::traits::EncodedState;
use crate::board::SLOT_COUNT;
use crate::cards::{CardValue, MAX_CARD, MIN_CARD};
use crate::policy::GameInfo;

/// Encodes an observation into a feature vector.
///
/// Encoders only see [`GameInfo`], so they can never leak hidden cards.
pub trait ObservationEncoder: Send + Sync {
    /// Encode the asking seat's view plus the held card.
    fn encode(&self, info: &GameInfo, card: Option<CardValue>) -> EncodedState;

    /// Length of the encoded vector.
    fn feature_count(&self) -> usize;
}

/// Map a card value onto `[0, 1]`.
#[must_use]
pub fn normalize_card(value: CardValue) -> f32 {
    (value - MIN_CARD) as f32 / (MAX_CARD - MIN_CARD) as f32
}

/// Head-to-head encoder: the asking seat and the seat after it.
///
/// Layout (54 features):
///
/// | index  | feature                              |
/// |--------|--------------------------------------|
/// | 0      | turn / 100                           |
/// | 1      | finishing countdown active           |
/// | 2      | holding a card                       |
/// | 3      | held card, normalized                |
/// | 4      | discard top present                  |
/// | 5      | discard top, normalized              |
/// | 6..18  | own slot statuses / 2                |
/// | 18..30 | own visible values, normalized       |
/// | 30..42 | next seat's statuses / 2             |
/// | 42..54 | next seat's visible values, normalized |
#[derive(Clone, Copy, Debug, Default)]
pub struct DuelEncoder;

impl DuelEncoder {
    /// Number of features produced.
    pub const FEATURES: usize = 6 + 4 * SLOT_COUNT;
}

fn flag(on: bool) -> f32 {
    if on {
        1.0
    } else {
        0.0
    }
}

impl ObservationEncoder for DuelEncoder {
    fn encode(&self, info: &GameInfo, card: Option<CardValue>) -> EncodedState {
        let me = info.seat;
        let next = me.next(info.player_count());
        let mut features = Vec::with_capacity(Self::FEATURES);

        features.push(info.turn as f32 / 100.0);
        features.push(flag(info.finishing));
        features.push(flag(card.is_some()));
        features.push(card.map(normalize_card).unwrap_or(0.0));
        features.push(flag(info.discard_top.is_some()));
        features.push(info.discard_top.map(normalize_card).unwrap_or(0.0));

        for seat in [me, next] {
            features.extend(
                info.statuses[seat]
                    .iter()
                    .map(|s| f32::from(s.ordinal()) / 2.0),
            );
            features.extend(info.values[seat].iter().map(|&v| normalize_card(v)));
        }

        EncodedState::new(features)
    }

    fn feature_count(&self) -> usize {
        Self::FEATURES
    }
}
