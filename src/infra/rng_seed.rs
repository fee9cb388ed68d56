//! RngSeed: seed для RNG раздач.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8; 32]);
//!   - выводить seed конкретной раздачи:
//!         new = H(domain || base || table_index || hand_index)
//!   - создавать DeterministicRng из seed.
//!
//! Так каждая раздача симуляции воспроизводится отдельно, без прогона
//! всех предыдущих.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Seed из u64 (для CLI и тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed раздачи `hand_index` за столом `table_index`.
    pub fn derive(&self, table_index: u64, hand_index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"HOLDEM_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(table_index.to_le_bytes());
        hasher.update(hand_index.to_le_bytes());

        let mut out = [0u8; 32];
        out.copy_from_slice(&hasher.finalize());
        Self { bytes: out }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
