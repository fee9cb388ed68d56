use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Действие игрока. Всегда выполняется местом `TableState::current_player`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Fold,
    Check,
    /// Уравнять `max_bet` (или пойти all-in, если стека не хватает).
    Call,
    /// Bet на улице, где ещё нет ставки. Сумма – полный размер ставки.
    Bet(Chips),
    /// Raise существующей ставки. Сумма – повышение сверх колла.
    Raise(Chips),
}

impl PlayerAction {
    /// Сумма, приложенная к действию (0 для fold/check/call).
    pub fn amount(&self) -> Chips {
        match self {
            PlayerAction::Bet(a) | PlayerAction::Raise(a) => *a,
            PlayerAction::Fold | PlayerAction::Check | PlayerAction::Call => Chips::ZERO,
        }
    }

    /// Bet или Raise.
    pub fn is_aggressive(&self) -> bool {
        matches!(self, PlayerAction::Bet(_) | PlayerAction::Raise(_))
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::Fold => f.write_str("fold"),
            PlayerAction::Check => f.write_str("check"),
            PlayerAction::Call => f.write_str("call"),
            PlayerAction::Bet(a) => write!(f, "bet {a}"),
            PlayerAction::Raise(a) => write!(f, "raise {a}"),
        }
    }
}
