//! Оркестратор одной раздачи: сдача, блайнды, опрос ботов, шоудаун.

use log::{debug, info, warn};

use crate::api::build_player_view;
use crate::bots::{choose_legal, Bot};
use crate::domain::TableState;
use crate::engine::errors::EngineError;
use crate::engine::game_loop::{apply_action, deal_hole_cards, post_blinds};
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{blind_seats, next_active_seat};
use crate::engine::showdown::{reset_for_next_hand, resolve_showdown};
use crate::engine::validation::chips_required;
use crate::engine::RandomSource;
use crate::eval::HandEvaluator;

/// Сыграть раздачу от сдачи до шоудауна.
/// Возвращает стол, подготовленный к следующей раздаче.
pub fn play_hand<E: HandEvaluator, R: RandomSource>(
    state: TableState,
    bots: &mut [Box<dyn Bot>],
    evaluator: &E,
    rng: &mut R,
) -> Result<TableState, EngineError> {
    play_hand_recorded(state, bots, evaluator, rng).map(|(table, _)| table)
}

/// То же, что `play_hand`, плюс полная история раздачи.
pub fn play_hand_recorded<E: HandEvaluator, R: RandomSource>(
    state: TableState,
    bots: &mut [Box<dyn Bot>],
    evaluator: &E,
    rng: &mut R,
) -> Result<(TableState, HandHistory), EngineError> {
    if bots.len() != state.num_seats() {
        return Err(EngineError::PlayerCountMismatch {
            bots: bots.len(),
            seats: state.num_seats(),
        });
    }

    let mut history = HandHistory::new();
    history.push(HandEventKind::HandStarted {
        dealer: state.dealer_index,
        stacks: state.stacks.clone(),
    });

    let mut table = deal_hole_cards(&state)?;
    for (seat, cards) in table.hands.iter().enumerate() {
        history.push(HandEventKind::HoleCardsDealt {
            seat,
            cards: cards.clone(),
        });
    }

    let (sb_seat, bb_seat) = blind_seats(&table)?;
    let before_blinds = table.stacks.clone();
    table = post_blinds(&table)?;
    history.push(HandEventKind::BlindsPosted {
        small_blind: (sb_seat, before_blinds[sb_seat] - table.stacks[sb_seat]),
        big_blind: (bb_seat, before_blinds[bb_seat] - table.stacks[bb_seat]),
    });
    record_streets(&mut history, &state, &table);

    let limit = table.config.max_actions_per_hand;
    let mut decisions: u32 = 0;

    while !table.is_finished() {
        let seat = table.current_player;
        if !table.can_act(seat) {
            // Сфолдившие и all-in места ботов не спрашиваем.
            table.current_player = next_active_seat(&table, seat)
                .ok_or(EngineError::Internal("торговля открыта, но ходить некому"))?;
            continue;
        }

        decisions += 1;
        if decisions > limit {
            return Err(EngineError::ActionLimitExceeded(limit));
        }

        let view = build_player_view(&table, seat);
        let requested = bots[seat].decide(&view);
        let action = choose_legal(requested, &view.legal_actions)
            .ok_or(EngineError::Internal("у активного игрока нет легальных действий"))?;

        if action != requested {
            warn!(
                "bot {} at seat {} returned illegal {}, falling back to {}",
                bots[seat].name(),
                seat,
                requested,
                action
            );
            history.push(HandEventKind::ActionReplaced {
                seat,
                requested,
                applied: action,
            });
        }

        let committed = chips_required(&table, &action);
        let next = apply_action(&table, action)?;
        debug!("seat {} ({}) -> {}", seat, bots[seat].name(), action);

        history.push(HandEventKind::PlayerActed {
            seat,
            action,
            committed,
            new_stack: next.stacks[seat],
            pot_after: next.pot,
        });
        record_streets(&mut history, &table, &next);
        table = next;
    }

    let result = resolve_showdown(&table, evaluator)?;
    for &(seat, rank) in &result.scores {
        history.push(HandEventKind::ShowdownReveal {
            seat,
            hole_cards: table.hands[seat].clone(),
            rank,
        });
    }
    for &(seat, amount) in &result.payouts {
        history.push(HandEventKind::PotAwarded { seat, amount });
    }
    history.push(HandEventKind::HandFinished {
        winners: result.winners.clone(),
    });

    info!(
        "hand finished: pot {}, winners {:?}, board {:?}",
        table.pot, result.winners, table.board
    );

    Ok((reset_for_next_hand(&table, &result, rng), history))
}

/// Записать в историю все улицы, открытые между двумя состояниями.
fn record_streets(history: &mut HandHistory, before: &TableState, after: &TableState) {
    let mut street = before.street;
    while street < after.street {
        let Some((next, _)) = street.next() else { break };
        history.push(HandEventKind::StreetChanged {
            street: next,
            board: after.board[..next.board_len()].to_vec(),
        });
        street = next;
    }
}
