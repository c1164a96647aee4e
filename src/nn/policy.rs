//! Model-driven seat.

use super::encoder::ObservationEncoder;
use super::traits::PolicyNetwork;
use crate::cards::CardValue;
use crate::core::LegalityMask;
use crate::policy::{GameInfo, Policy};

/// A seat that encodes its observation, scores every action code with a
/// network, and plays the highest-scoring legal code.
///
/// Illegal codes are masked before the argmax, so the result is always
/// legal whenever the mask has any legal code. Ties go to the lowest code.
pub struct NetworkPolicy<E, N> {
    encoder: E,
    network: N,
}

impl<E: ObservationEncoder, N: PolicyNetwork> NetworkPolicy<E, N> {
    pub fn new(encoder: E, network: N) -> Self {
        Self { encoder, network }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn network(&self) -> &N {
        &self.network
    }
}

/// Highest-scoring legal code; NaN scores never win. Falls back to the
/// lowest legal code when every legal score is NaN.
pub fn masked_argmax(scores: &[f32], mask: &LegalityMask) -> Option<u8> {
    let mut best: Option<(u8, f32)> = None;
    for code in mask.legal_codes() {
        let score = scores.get(code as usize).copied().unwrap_or(f32::NEG_INFINITY);
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, s)) if s >= score => {}
            _ => best = Some((code, score)),
        }
    }
    best.map(|(code, _)| code)
        .or_else(|| mask.legal_codes().first().copied())
}

impl<E: ObservationEncoder, N: PolicyNetwork> Policy for NetworkPolicy<E, N> {
    fn decide(&mut self, mask: &LegalityMask, info: &GameInfo, card: Option<CardValue>) -> u8 {
        let encoded = self.encoder.encode(info, card);
        let scores = self.network.predict(&encoded);
        // An empty mask only happens outside a decision; the engine rejects
        // whatever comes back.
        masked_argmax(&scores, mask).unwrap_or(0)
    }
}
