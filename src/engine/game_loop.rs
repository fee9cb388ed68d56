use log::debug;

use crate::domain::{Chips, PlayerStatus, SeatIndex, TableState, HOLE_CARDS};
use crate::engine::actions::PlayerAction;
use crate::engine::betting::should_advance_street;
use crate::engine::errors::EngineError;
use crate::engine::positions::{blind_seats, next_active_seat};
use crate::engine::validation::validate_action;

/// Раздача карманных карт: место `i` получает карты `i*2` и `i*2+1`
/// с верха колоды. Победители прошлой раздачи сбрасываются.
pub fn deal_hole_cards(state: &TableState) -> Result<TableState, EngineError> {
    if state.hands.iter().any(|h| !h.is_empty()) {
        return Err(EngineError::Internal("карманные карты уже розданы"));
    }

    let n = state.num_seats();
    let (dealt, deck) = state.deck.deal(HOLE_CARDS * n)?;

    let mut next = state.clone();
    next.deck = deck;
    next.hands = dealt.chunks(HOLE_CARDS).map(|c| c.to_vec()).collect();
    next.winners.clear();
    Ok(next)
}

/// Постинг блайндов.
///
/// - места без фишек сидят эту раздачу (Folded);
/// - блайнд = min(размер, стек), опустевший стек → AllIn;
/// - первым на префлопе ходит первый активный после BB.
pub fn post_blinds(state: &TableState) -> Result<TableState, EngineError> {
    let (sb_seat, bb_seat) = blind_seats(state)?;

    let mut next = state.clone();
    for seat in 0..next.num_seats() {
        next.statuses[seat] = if next.stacks[seat].is_zero() {
            PlayerStatus::Folded
        } else {
            PlayerStatus::Active
        };
        next.acted[seat] = false;
        next.current_bets[seat] = Chips::ZERO;
    }

    let sb_paid = commit_chips(&mut next, sb_seat, state.small_blind());
    let bb_paid = commit_chips(&mut next, bb_seat, state.big_blind());

    // Короткий BB может оказаться меньше SB.
    next.max_bet = sb_paid.max(bb_paid);
    next.min_raise = state.big_blind();

    debug!(
        "blinds: sb seat {} paid {}, bb seat {} paid {}",
        sb_seat, sb_paid, bb_seat, bb_paid
    );

    if let Some(first) = next_active_seat(&next, bb_seat) {
        next.current_player = first;
    }

    run_out_if_needed(next)
}

/// Применить действие текущего игрока.
///
/// Если после действия раунд ставок завершён – открываются следующие улицы
/// (возможно несколько подряд, вплоть до шоудауна). Иначе ход переходит
/// к следующему активному месту.
pub fn apply_action(state: &TableState, action: PlayerAction) -> Result<TableState, EngineError> {
    validate_action(state, &action)?;

    let seat = state.current_player;
    let to_call = state.to_call(seat);
    let mut next = state.clone();

    match action {
        PlayerAction::Fold => {
            next.statuses[seat] = PlayerStatus::Folded;
        }

        PlayerAction::Check => {}

        PlayerAction::Call => {
            commit_chips(&mut next, seat, to_call);
        }

        PlayerAction::Bet(amount) | PlayerAction::Raise(amount) => {
            let total = to_call + amount;
            commit_chips(&mut next, seat, total);

            next.max_bet = next.current_bets[seat];
            // Первый bet задаёт минимальный рейз своим полным размером.
            next.min_raise = match action {
                PlayerAction::Raise(_) => amount,
                _ => total,
            };

            // Рейз заново открывает торговлю для всех, кто может ответить.
            for other in 0..next.num_seats() {
                if other != seat && next.can_act(other) {
                    next.acted[other] = false;
                }
            }
        }
    }

    next.acted[seat] = true;

    debug!(
        "seat {} {} -> stack {}, pot {}, max_bet {}",
        seat, action, next.stacks[seat], next.pot, next.max_bet
    );

    if should_advance_street(&next) {
        run_out_if_needed(next)
    } else {
        next.current_player =
            next_active_seat(&next, seat).ok_or(EngineError::Internal("нет следующего активного игрока"))?;
        Ok(next)
    }
}

/// Открыть следующую улицу.
///
/// Сбрасывает ставки улицы и флаги `acted`; первым ходит первый активный
/// игрок после дилера. Вызов на Showdown – нарушение инварианта.
pub fn advance_street(state: &TableState) -> Result<TableState, EngineError> {
    let (street, count) = state
        .street
        .next()
        .ok_or(EngineError::Internal("advance_street на Showdown"))?;

    let (dealt, deck) = state.deck.deal(count)?;

    let mut next = state.clone();
    next.deck = deck;
    next.board.extend(dealt);
    next.street = street;
    next.current_bets.iter_mut().for_each(|b| *b = Chips::ZERO);
    next.acted.iter_mut().for_each(|a| *a = false);
    next.max_bet = Chips::ZERO;
    next.min_raise = state.big_blind();

    if let Some(first) = next_active_seat(&next, next.dealer_index) {
        next.current_player = first;
    }

    debug!("street -> {}, board {:?}", next.street, next.board);
    Ok(next)
}

/// Открывать улицы, пока торговля закрыта и не достигнут шоудаун.
fn run_out_if_needed(mut state: TableState) -> Result<TableState, EngineError> {
    while should_advance_street(&state) {
        state = advance_street(&state)?;
    }
    Ok(state)
}

/// Перенести не более `amount` из стека в банк и ставку улицы.
/// Опустевший стек переводит место в AllIn. Возвращает реально внесённое.
fn commit_chips(state: &mut TableState, seat: SeatIndex, amount: Chips) -> Chips {
    let paid = amount.min(state.stacks[seat]);
    state.stacks[seat] -= paid;
    state.current_bets[seat] += paid;
    state.pot += paid;

    if state.stacks[seat].is_zero() && state.statuses[seat] == PlayerStatus::Active {
        state.statuses[seat] = PlayerStatus::AllIn;
    }
    paid
}
