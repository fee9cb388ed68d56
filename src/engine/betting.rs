//! Проверки завершения раунда ставок.

use crate::domain::TableState;

/// Раунд ставок завершён, если каждое место, которое ещё может ходить,
/// уже походило и уравняло `max_bet`.
///
/// Если ходить некому, раунд завершён тривиально.
pub fn is_betting_round_complete(state: &TableState) -> bool {
    state
        .active_seats()
        .all(|i| state.acted[i] && state.current_bets[i] == state.max_bet)
}

/// Торговаться больше не с кем:
/// - в раздаче остался максимум один претендент на банк;
/// - никто не может ходить (все в all-in);
/// - ходить может ровно один игрок и ему нечего уравнивать.
pub fn is_action_closed(state: &TableState) -> bool {
    if state.seats_in_hand().count() <= 1 {
        return true;
    }

    let mut active = state.active_seats();
    match (active.next(), active.next()) {
        (None, _) => true,
        (Some(seat), None) => state.current_bets[seat] == state.max_bet,
        _ => false,
    }
}

/// Нужно ли открывать следующую улицу.
pub fn should_advance_street(state: &TableState) -> bool {
    !state.is_finished() && (is_betting_round_complete(state) || is_action_closed(state))
}
