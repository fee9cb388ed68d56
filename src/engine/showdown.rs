use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Deck, HandRank, PlayerStatus, SeatIndex, Street, TableState};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;
use crate::eval::HandEvaluator;

/// Итог шоудауна: оценки рук, победители и выплаты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownResult {
    /// Оценка каждого несфолдившего места, по возрастанию места.
    pub scores: Vec<(SeatIndex, HandRank)>,
    /// Все места с максимальной оценкой, по возрастанию места.
    pub winners: Vec<SeatIndex>,
    /// Сколько получил каждый победитель.
    pub payouts: Vec<(SeatIndex, Chips)>,
}

/// Оценить руки и поделить банк, не трогая состояние.
///
/// Банк один (сайд-потов нет): игрок в all-in на меньшую сумму
/// всё равно претендует на весь банк.
/// Делёж: `pot / k` каждому, остаток `pot % k` – первому победителю по номеру места.
pub fn resolve_showdown<E: HandEvaluator>(
    state: &TableState,
    evaluator: &E,
) -> Result<ShowdownResult, EngineError> {
    if state.street != Street::Showdown {
        return Err(EngineError::HandNotFinished);
    }

    let scores: Vec<(SeatIndex, HandRank)> = state
        .seats_in_hand()
        .map(|seat| (seat, evaluator.score(&state.hands[seat], &state.board)))
        .collect();

    let best = scores
        .iter()
        .map(|(_, rank)| *rank)
        .max()
        .ok_or(EngineError::NoActivePlayers)?;

    let winners: Vec<SeatIndex> = scores
        .iter()
        .filter(|(_, rank)| *rank == best)
        .map(|(seat, _)| *seat)
        .collect();

    let k = winners.len() as u64;
    let share = Chips(state.pot.0 / k);
    let remainder = Chips(state.pot.0 % k);

    let payouts = winners
        .iter()
        .enumerate()
        .map(|(idx, &seat)| {
            let prize = if idx == 0 { share + remainder } else { share };
            (seat, prize)
        })
        .collect();

    Ok(ShowdownResult {
        scores,
        winners,
        payouts,
    })
}

/// Завершить раздачу: выплатить банк и подготовить стол к следующей.
pub fn finalize_hand<E: HandEvaluator, R: RandomSource>(
    state: &TableState,
    evaluator: &E,
    rng: &mut R,
) -> Result<TableState, EngineError> {
    let result = resolve_showdown(state, evaluator)?;
    Ok(reset_for_next_hand(state, &result, rng))
}

/// Новая раздача за тем же столом: свежая колода, стеки с учётом выплат,
/// кнопка сдвигается на одно место, `winners` сохраняются для отчёта.
pub(crate) fn reset_for_next_hand<R: RandomSource>(
    state: &TableState,
    result: &ShowdownResult,
    rng: &mut R,
) -> TableState {
    let n = state.num_seats();

    let mut stacks = state.stacks.clone();
    for &(seat, prize) in &result.payouts {
        stacks[seat] += prize;
    }

    let dealer_index = (state.dealer_index + 1) % n;

    debug!(
        "hand finalized: winners {:?}, pot {}, next dealer {}",
        result.winners, state.pot, dealer_index
    );

    TableState {
        config: state.config.clone(),
        deck: Deck::standard_52().shuffled(rng),
        hands: vec![Vec::new(); n],
        stacks,
        current_bets: vec![Chips::ZERO; n],
        statuses: vec![PlayerStatus::Active; n],
        acted: vec![false; n],
        board: Vec::new(),
        street: Street::PreFlop,
        pot: Chips::ZERO,
        dealer_index,
        current_player: dealer_index,
        max_bet: Chips::ZERO,
        min_raise: state.big_blind(),
        winners: result.winners.clone(),
    }
}
