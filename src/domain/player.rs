use serde::{Deserialize, Serialize};

/// Статус места в текущей раздаче.
///
/// Folded и AllIn взаимоисключающие: это одно поле, а не два флага.
/// Признак "уже ходил на этой улице" хранится отдельно (`TableState::acted`).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerStatus {
    /// Игрок в раздаче и может делать ставки.
    #[default]
    Active,
    /// Игрок сфолдил (или сидит без фишек) и больше не претендует на банк.
    Folded,
    /// Стек ушёл в ноль – ходить больше не может, но банк выиграть может.
    AllIn,
}

impl PlayerStatus {
    /// Может ли место ещё делать ставки.
    pub fn can_act(self) -> bool {
        matches!(self, PlayerStatus::Active)
    }

    /// Претендует ли место на банк.
    pub fn is_in_hand(self) -> bool {
        matches!(self, PlayerStatus::Active | PlayerStatus::AllIn)
    }
}
