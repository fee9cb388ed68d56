//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Движок зависит только от трейта `HandEvaluator`; `BestHandEvaluator` –
//! реализация по умолчанию через `evaluate_best_hand(hole, board)`.

pub mod evaluator;
pub mod hand_rank;

pub use evaluator::evaluate_best_hand;
pub use hand_rank::{describe_hand, HandCategory};

use crate::domain::card::Card;
use crate::domain::hand::HandRank;

/// Контракт оценщика: чистая детерминированная функция,
/// большее значение – более сильная рука, равные делят банк.
pub trait HandEvaluator {
    fn score(&self, hole: &[Card], board: &[Card]) -> HandRank;
}

/// Полноценный ранжировщик лучших 5 карт из 7.
#[derive(Clone, Copy, Debug, Default)]
pub struct BestHandEvaluator;

impl HandEvaluator for BestHandEvaluator {
    fn score(&self, hole: &[Card], board: &[Card]) -> HandRank {
        evaluate_best_hand(hole, board)
    }
}

impl<F> HandEvaluator for F
where
    F: Fn(&[Card], &[Card]) -> HandRank,
{
    fn score(&self, hole: &[Card], board: &[Card]) -> HandRank {
        self(hole, board)
    }
}
