use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Колода карт. Неизменяемая последовательность: все операции
/// возвращают новую колоду и не трогают исходную.
///
/// Верх колоды: начало вектора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// 2..A по трефам, 2..A по бубнам, 2..A по червам, 2..A по пикам.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Колода из заранее заданных карт (для тестов и реплея).
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Перемешанная копия колоды.
    pub fn shuffled<R: RandomSource>(&self, rng: &mut R) -> Deck {
        let mut cards = self.cards.clone();
        rng.shuffle(&mut cards);
        Deck { cards }
    }

    /// Снять `n` карт сверху: (сданные карты, остаток колоды).
    pub fn deal(&self, n: usize) -> Result<(Vec<Card>, Deck), EngineError> {
        if n > self.cards.len() {
            return Err(EngineError::DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let dealt = self.cards[..n].to_vec();
        let rest = Deck {
            cards: self.cards[n..].to_vec(),
        };
        Ok((dealt, rest))
    }
}
