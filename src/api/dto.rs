use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::player::PlayerStatus;
use crate::domain::{SeatIndex, TableState};
use crate::engine::actions::PlayerAction;
use crate::engine::validation::legal_actions;

/// Публичная информация о месте за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatView {
    pub seat: SeatIndex,
    pub stack: Chips,
    pub current_bet: Chips,
    pub status: PlayerStatus,
    pub acted: bool,
}

/// То, что видит игрок на своём месте: свои карты, борд и публичную
/// часть стола. Чужие карманные карты скрыты.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub seat: SeatIndex,
    pub hole_cards: Vec<Card>,
    pub board: Vec<Card>,
    pub seats: Vec<SeatView>,
    pub street: Street,
    pub pot: Chips,
    pub max_bet: Chips,
    pub min_raise: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub dealer_index: SeatIndex,
    pub current_player: SeatIndex,
    /// Сколько нужно доплатить этому месту.
    pub to_call: Chips,
    /// Легальные действия; пусто, если сейчас не ход этого места.
    pub legal_actions: Vec<PlayerAction>,
}

impl PlayerView {
    /// Стек этого места.
    pub fn stack(&self) -> Chips {
        self.seats[self.seat].stack
    }

    pub fn is_my_turn(&self) -> bool {
        self.current_player == self.seat
    }
}

/// Собрать вид стола для места `seat`.
pub fn build_player_view(state: &TableState, seat: SeatIndex) -> PlayerView {
    let seats = (0..state.num_seats())
        .map(|i| SeatView {
            seat: i,
            stack: state.stacks[i],
            current_bet: state.current_bets[i],
            status: state.statuses[i],
            acted: state.acted[i],
        })
        .collect();

    let legal = if state.current_player == seat {
        legal_actions(state)
    } else {
        Vec::new()
    };

    PlayerView {
        seat,
        hole_cards: state.hands[seat].clone(),
        board: state.board.clone(),
        seats,
        street: state.street,
        pot: state.pot,
        max_bet: state.max_bet,
        min_raise: state.min_raise,
        small_blind: state.small_blind(),
        big_blind: state.big_blind(),
        dealer_index: state.dealer_index,
        current_player: state.current_player,
        to_call: state.to_call(seat),
        legal_actions: legal,
    }
}
