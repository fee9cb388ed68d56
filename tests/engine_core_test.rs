use holdem_engine::domain::{
    card::{parse_cards, Card},
    chips::Chips,
    hand::Street,
    player::PlayerStatus,
    table::{TableConfig, TableState},
};
use holdem_engine::engine::{
    actions::PlayerAction,
    betting::{is_action_closed, is_betting_round_complete},
    errors::EngineError,
    game_loop::{advance_street, apply_action, deal_hole_cards, post_blinds},
    positions::{blind_seats, next_active_seat, seats_after},
    RandomSource,
};

/// Простой детерминированный RNG для тестов:
/// shuffle ничего не делает => колода остаётся в стандартном порядке.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

fn make_table(stacks: &[u64], dealer: usize) -> TableState {
    let stacks = stacks.iter().copied().map(Chips).collect();
    TableState::new(stacks, TableConfig::default(), dealer, &mut DummyRng)
        .expect("valid table")
}

fn start_hand(stacks: &[u64], dealer: usize) -> TableState {
    let dealt = deal_hole_cards(&make_table(stacks, dealer)).expect("deal");
    post_blinds(&dealt).expect("blinds")
}

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid cards")
}

//
// deal_hole_cards
//
#[test]
fn deal_gives_two_cards_per_seat_from_top_of_deck() {
    let table = deal_hole_cards(&make_table(&[1000, 1000, 1000], 0)).unwrap();

    assert_eq!(table.hands[0], cards("2c 3c"));
    assert_eq!(table.hands[1], cards("4c 5c"));
    assert_eq!(table.hands[2], cards("6c 7c"));
    assert_eq!(table.deck.len(), 52 - 6);
}

#[test]
fn deal_clears_previous_winners() {
    let mut table = make_table(&[1000, 1000, 1000], 0);
    table.winners = vec![2];

    let dealt = deal_hole_cards(&table).unwrap();
    assert!(dealt.winners.is_empty());

    let started = post_blinds(&dealt).unwrap();
    assert!(started.winners.is_empty());
}

#[test]
fn deal_twice_is_rejected() {
    let table = deal_hole_cards(&make_table(&[1000, 1000], 0)).unwrap();
    let err = deal_hole_cards(&table).unwrap_err();
    assert!(matches!(err, EngineError::Internal(_)));
}

//
// positions.rs
//
#[test]
fn seats_after_wraps_and_ends_with_start() {
    let order: Vec<usize> = seats_after(4, 2).collect();
    assert_eq!(order, vec![3, 0, 1, 2]);
}

#[test]
fn next_active_seat_skips_folded_and_all_in() {
    let mut table = make_table(&[1000, 1000, 1000, 1000], 0);
    table.statuses[1] = PlayerStatus::Folded;
    table.statuses[2] = PlayerStatus::AllIn;

    assert_eq!(next_active_seat(&table, 0), Some(3));
    assert_eq!(next_active_seat(&table, 3), Some(0));

    table.statuses[3] = PlayerStatus::Folded;
    // Единственное активное место находится последним.
    assert_eq!(next_active_seat(&table, 0), Some(0));

    table.statuses[0] = PlayerStatus::AllIn;
    assert_eq!(next_active_seat(&table, 0), None);
}

#[test]
fn blind_seats_heads_up_dealer_posts_small_blind() {
    let table = make_table(&[1000, 1000], 1);
    assert_eq!(blind_seats(&table).unwrap(), (1, 0));
}

#[test]
fn blind_seats_three_handed_follow_the_button() {
    let table = make_table(&[1000, 1000, 1000], 2);
    assert_eq!(blind_seats(&table).unwrap(), (0, 1));
}

#[test]
fn blind_seats_skip_empty_stacks() {
    let table = make_table(&[1000, 0, 1000, 1000], 0);
    assert_eq!(blind_seats(&table).unwrap(), (2, 3));
}

#[test]
fn blind_seats_need_two_funded_players() {
    let table = make_table(&[1000, 0, 0], 0);
    assert_eq!(blind_seats(&table), Err(EngineError::NotEnoughPlayers(1)));
}

//
// post_blinds
//
#[test]
fn heads_up_blinds() {
    let table = start_hand(&[1000, 1000], 0);

    assert_eq!(table.stacks, vec![Chips(990), Chips(980)]);
    assert_eq!(table.current_bets, vec![Chips(10), Chips(20)]);
    assert_eq!(table.pot, Chips(30));
    assert_eq!(table.max_bet, Chips(20));
    assert_eq!(table.min_raise, Chips(20));
    // Хедз-ап: дилер на SB и ходит первым на префлопе.
    assert_eq!(table.current_player, 0);
    assert_eq!(table.street, Street::PreFlop);
}

#[test]
fn three_handed_blinds_and_first_to_act() {
    let table = start_hand(&[1000, 1000, 1000], 0);

    assert_eq!(table.stacks, vec![Chips(1000), Chips(990), Chips(980)]);
    assert_eq!(table.pot, Chips(30));
    assert_eq!(table.max_bet, Chips(20));
    assert_eq!(table.current_player, 0);
    assert!(table.acted.iter().all(|a| !a));
}

#[test]
fn short_small_blind_goes_all_in() {
    let table = start_hand(&[1000, 5, 1000], 0);

    assert_eq!(table.stacks[1], Chips::ZERO);
    assert_eq!(table.current_bets[1], Chips(5));
    assert_eq!(table.statuses[1], PlayerStatus::AllIn);
    assert_eq!(table.max_bet, Chips(20));
    assert_eq!(table.pot, Chips(25));
}

#[test]
fn short_big_blind_below_small_blind() {
    let table = start_hand(&[1000, 1000, 5], 0);

    assert_eq!(table.statuses[2], PlayerStatus::AllIn);
    assert_eq!(table.current_bets[1], Chips(10));
    assert_eq!(table.current_bets[2], Chips(5));
    assert_eq!(table.max_bet, Chips(10));
    assert_eq!(table.current_player, 0);
    assert_eq!(table.to_call(0), Chips(10));
}

#[test]
fn empty_stack_sits_out_as_folded() {
    let table = start_hand(&[1000, 0, 1000, 1000], 0);

    assert_eq!(table.statuses[1], PlayerStatus::Folded);
    assert_eq!(table.current_bets[2], Chips(10));
    assert_eq!(table.current_bets[3], Chips(20));
    assert_eq!(table.current_player, 0);
}

#[test]
fn blinds_that_put_everyone_all_in_run_out_the_board() {
    let table = start_hand(&[10, 20], 0);

    assert_eq!(table.street, Street::Showdown);
    assert_eq!(table.board.len(), 5);
    assert_eq!(table.pot, Chips(30));
    assert_eq!(table.total_chips(), Chips(30));
}

//
// Сценарий из трёх игроков от блайндов до флопа.
//
#[test]
fn three_handed_preflop_to_flop() {
    let table = start_hand(&[1000, 1000, 1000], 0);
    let deck_before_flop = table.deck.len();

    let table = apply_action(&table, PlayerAction::Call).unwrap();
    assert_eq!(table.stacks, vec![Chips(980), Chips(990), Chips(980)]);
    assert_eq!(table.pot, Chips(50));
    assert_eq!(table.current_player, 1);
    assert!(!is_betting_round_complete(&table));

    // SB доплачивает до BB.
    let table = apply_action(&table, PlayerAction::Call).unwrap();
    assert_eq!(table.pot, Chips(60));
    assert_eq!(table.current_player, 2);
    assert_eq!(table.street, Street::PreFlop);

    // У BB остаётся опция – чек закрывает префлоп.
    let table = apply_action(&table, PlayerAction::Check).unwrap();
    assert_eq!(table.street, Street::Flop);
    assert_eq!(table.board, cards("8c 9c Tc"));
    assert_eq!(table.deck.len(), deck_before_flop - 3);
    assert!(table.current_bets.iter().all(|b| b.is_zero()));
    assert!(table.acted.iter().all(|a| !a));
    assert_eq!(table.max_bet, Chips::ZERO);
    assert_eq!(table.min_raise, Chips(20));
    // После флопа первым ходит первый активный слева от дилера.
    assert_eq!(table.current_player, 1);
    assert_eq!(table.total_chips(), Chips(3000));
}

#[test]
fn checks_around_walk_every_street() {
    let mut table = start_hand(&[1000, 1000], 0);
    table = apply_action(&table, PlayerAction::Call).unwrap();
    table = apply_action(&table, PlayerAction::Check).unwrap();

    let expected = [
        (Street::Flop, 3),
        (Street::Turn, 4),
        (Street::River, 5),
        (Street::Showdown, 5),
    ];
    for (street, board_len) in expected {
        assert_eq!(table.street, street);
        assert_eq!(table.board.len(), board_len);
        if street == Street::Showdown {
            break;
        }
        // Хедз-ап после флопа первым ходит BB (место 1).
        assert_eq!(table.current_player, 1);
        table = apply_action(&table, PlayerAction::Check).unwrap();
        table = apply_action(&table, PlayerAction::Check).unwrap();
    }

    assert_eq!(table.pot, Chips(40));
    assert_eq!(table.deck.len(), 52 - 4 - 5);
}

//
// advance_street
//
#[test]
fn advance_street_deals_board_and_resets_round() {
    let table = start_hand(&[1000, 1000, 1000], 0);
    let flop = advance_street(&table).unwrap();

    assert_eq!(flop.street, Street::Flop);
    assert_eq!(flop.board.len(), 3);
    assert_eq!(flop.deck.len(), table.deck.len() - 3);
    assert_eq!(flop.max_bet, Chips::ZERO);
    // Банк не трогается: ставки улицы уже в нём.
    assert_eq!(flop.pot, table.pot);
}

#[test]
fn advance_street_from_showdown_is_an_error() {
    let mut table = start_hand(&[1000, 1000], 0);
    table.street = Street::Showdown;
    assert!(matches!(
        advance_street(&table),
        Err(EngineError::Internal(_))
    ));
}

#[test]
fn advance_street_with_empty_deck_reports_exhaustion() {
    let mut table = start_hand(&[1000, 1000], 0);
    table.deck = holdem_engine::domain::Deck::from_cards(cards("Ah Kh"));

    assert_eq!(
        advance_street(&table),
        Err(EngineError::DeckExhausted {
            requested: 3,
            remaining: 2
        })
    );
}

//
// betting.rs
//
#[test]
fn round_completion_needs_both_acted_and_matched() {
    let mut table = start_hand(&[1000, 1000, 1000], 0);
    table.current_bets = vec![Chips(20); 3];
    table.acted = vec![true; 3];
    assert!(is_betting_round_complete(&table));

    let mut short = table.clone();
    short.current_bets[1] = Chips(10);
    assert!(!is_betting_round_complete(&short));

    let mut waiting = table.clone();
    waiting.acted[2] = false;
    assert!(!is_betting_round_complete(&waiting));

    // Сфолдившие и all-in места в проверке не участвуют.
    let mut folded = short.clone();
    folded.statuses[1] = PlayerStatus::Folded;
    assert!(is_betting_round_complete(&folded));
}

#[test]
fn action_closes_when_one_seat_remains() {
    let table = start_hand(&[1000, 1000, 1000], 0);
    assert!(!is_action_closed(&table));

    let mut folded = table.clone();
    folded.statuses[0] = PlayerStatus::Folded;
    folded.statuses[1] = PlayerStatus::Folded;
    assert!(is_action_closed(&folded));
}

#[test]
fn lone_active_seat_must_still_match_the_bet() {
    let mut table = start_hand(&[1000, 1000], 0);
    table.statuses[1] = PlayerStatus::AllIn;

    // Месту 0 ещё нужно ответить на BB.
    assert!(!is_action_closed(&table));

    table.current_bets[0] = table.max_bet;
    assert!(is_action_closed(&table));
}
