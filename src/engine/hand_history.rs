use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandRank, Street};
use crate::domain::SeatIndex;
use crate::engine::actions::PlayerAction;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted {
        dealer: SeatIndex,
        stacks: Vec<Chips>,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Кнопка/блайнды.
    BlindsPosted {
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    /// Бот вернул нелегальное действие, оркестратор подставил другое.
    ActionReplaced {
        seat: SeatIndex,
        requested: PlayerAction,
        applied: PlayerAction,
    },

    /// Действие игрока.
    PlayerActed {
        seat: SeatIndex,
        action: PlayerAction,
        committed: Chips,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Переход на новую улицу; `board` – весь борд после перехода.
    StreetChanged { street: Street, board: Vec<Card> },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        hole_cards: Vec<Card>,
        rank: HandRank,
    },

    /// Выплата банка.
    PotAwarded { seat: SeatIndex, amount: Chips },

    /// Раздача завершена.
    HandFinished { winners: Vec<SeatIndex> },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    /// Только действия игроков, в порядке хода.
    pub fn actions(&self) -> impl Iterator<Item = (SeatIndex, PlayerAction)> + '_ {
        self.events.iter().filter_map(|e| match e.kind {
            HandEventKind::PlayerActed { seat, action, .. } => Some((seat, action)),
            _ => None,
        })
    }

    /// Какие улицы были открыты за раздачу.
    pub fn streets(&self) -> Vec<Street> {
        self.events
            .iter()
            .filter_map(|e| match e.kind {
                HandEventKind::StreetChanged { street, .. } => Some(street),
                _ => None,
            })
            .collect()
    }
}
