//! Шоудаун: победители, делёж банка, подготовка следующей раздачи.

use holdem_engine::domain::{
    parse_cards, Card, Chips, HandRank, PlayerStatus, Rank, Street, TableConfig, TableState,
};
use holdem_engine::engine::{finalize_hand, resolve_showdown, EngineError};
use holdem_engine::eval::BestHandEvaluator;
use holdem_engine::infra::NoShuffle;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

/// Стол, доведённый до шоудауна вручную.
fn showdown_table(hands: &[&str], board: &str, pot: u64) -> TableState {
    let n = hands.len();
    let mut table =
        TableState::new(vec![Chips(500); n], TableConfig::default(), 0, &mut NoShuffle).unwrap();
    table.hands = hands.iter().map(|h| cards(h)).collect();
    table.board = cards(board);
    table.street = Street::Showdown;
    table.pot = Chips(pot);
    table
}

/// Оценщик для тестов: туз в первой карманной карте – сильнее всего остального.
fn ace_high_wins(hole: &[Card], _board: &[Card]) -> HandRank {
    if hole[0].rank == Rank::Ace {
        HandRank(10)
    } else {
        HandRank(1)
    }
}

#[test]
fn odd_pot_remainder_goes_to_lowest_winning_seat() {
    let table = showdown_table(&["Ah 2c", "Kd 3c", "As 4c"], "9d 8d 7s 5h Jc", 101);

    let result = resolve_showdown(&table, &ace_high_wins).unwrap();
    assert_eq!(result.winners, vec![0, 2]);
    assert_eq!(result.payouts, vec![(0, Chips(51)), (2, Chips(50))]);

    let next = finalize_hand(&table, &ace_high_wins, &mut NoShuffle).unwrap();
    assert_eq!(next.stacks, vec![Chips(551), Chips(500), Chips(550)]);
    assert_eq!(next.winners, vec![0, 2]);
}

#[test]
fn single_winner_takes_whole_pot() {
    // Место 1 собирает флеш-рояль на борде с тузом и королём червей.
    let table = showdown_table(&["2c 7d", "Ah Kh", "Qs Qd"], "Qh Jh Th 3s 4d", 300);

    let result = resolve_showdown(&table, &BestHandEvaluator).unwrap();
    assert_eq!(result.winners, vec![1]);
    assert_eq!(result.payouts, vec![(1, Chips(300))]);
    assert_eq!(result.scores.len(), 3);
    // Сет дам сильнее, чем старшая карта.
    assert!(result.scores[2].1 > result.scores[0].1);
}

#[test]
fn folded_seats_are_not_scored() {
    let mut table = showdown_table(&["Ah Ad", "2c 7d", "3c 8d"], "Kh Qs 9c 5d 4s", 90);
    table.statuses[0] = PlayerStatus::Folded;
    table.statuses[2] = PlayerStatus::AllIn;

    let result = resolve_showdown(&table, &BestHandEvaluator).unwrap();
    let scored: Vec<usize> = result.scores.iter().map(|(seat, _)| *seat).collect();
    assert_eq!(scored, vec![1, 2]);
    assert!(!result.winners.contains(&0));
}

#[test]
fn identical_hands_chop() {
    // Борд играет за обоих.
    let table = showdown_table(&["2c 3d", "2d 3c"], "Ah Kh Qh Jh Th", 40);
    let result = resolve_showdown(&table, &BestHandEvaluator).unwrap();

    assert_eq!(result.winners, vec![0, 1]);
    assert_eq!(result.payouts, vec![(0, Chips(20)), (1, Chips(20))]);
}

#[test]
fn showdown_before_river_is_rejected() {
    let mut table = showdown_table(&["Ah Ad", "Kh Kd"], "2c 3c 4c", 40);
    table.street = Street::Flop;

    assert_eq!(
        resolve_showdown(&table, &BestHandEvaluator),
        Err(EngineError::HandNotFinished)
    );
}

#[test]
fn showdown_without_players_is_invariant_violation() {
    let mut table = showdown_table(&["Ah Ad", "Kh Kd"], "2c 3c 4c 9s Td", 40);
    table.statuses = vec![PlayerStatus::Folded; 2];

    let err = resolve_showdown(&table, &BestHandEvaluator).unwrap_err();
    assert_eq!(err, EngineError::NoActivePlayers);
    assert_eq!(
        err.category(),
        holdem_engine::engine::ErrorCategory::InvariantViolation
    );
}

#[test]
fn finalize_resets_table_for_next_hand() {
    let mut table = showdown_table(&["Ah Ad", "Kh Kd", "Qh Qd"], "2c 3c 4c 9s Td", 120);
    table.dealer_index = 2;
    table.current_bets = vec![Chips(40); 3];
    table.max_bet = Chips(40);
    table.min_raise = Chips(80);
    table.acted = vec![true; 3];
    table.statuses[2] = PlayerStatus::AllIn;

    let next = finalize_hand(&table, &BestHandEvaluator, &mut NoShuffle).unwrap();

    assert_eq!(next.stacks, vec![Chips(620), Chips(500), Chips(500)]);
    assert_eq!(next.winners, vec![0]);
    assert_eq!(next.dealer_index, 0);
    assert_eq!(next.street, Street::PreFlop);
    assert_eq!(next.pot, Chips::ZERO);
    assert_eq!(next.max_bet, Chips::ZERO);
    assert_eq!(next.min_raise, Chips(20));
    assert_eq!(next.deck.len(), 52);
    assert!(next.board.is_empty());
    assert!(next.hands.iter().all(|h| h.is_empty()));
    assert!(next.current_bets.iter().all(|b| b.is_zero()));
    assert!(next.acted.iter().all(|a| !a));
    assert!(next.statuses.iter().all(|s| *s == PlayerStatus::Active));
    assert_eq!(next.total_chips(), Chips(1620));
}
