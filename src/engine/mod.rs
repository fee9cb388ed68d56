//! Покерный движок: легальные действия, ставки, переход улиц, шоудаун.
//!
//! Все переходы – чистые функции `&TableState -> TableState`:
//!   - `deal_hole_cards` / `post_blinds` – начало раздачи;
//!   - `apply_action` – применить действие текущего игрока;
//!   - `advance_street` – открыть следующую улицу;
//!   - `finalize_hand` – шоудаун и подготовка следующей раздачи;
//!   - `play_hand` – прогнать раздачу целиком с ботами.

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod hand_runner;
pub mod positions;
pub mod showdown;
pub mod validation;

pub use actions::PlayerAction;
pub use betting::{is_action_closed, is_betting_round_complete};
pub use errors::{EngineError, ErrorCategory};
pub use game_loop::{advance_street, apply_action, deal_hole_cards, post_blinds};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use hand_runner::{play_hand, play_hand_recorded};
pub use showdown::{finalize_hand, resolve_showdown, ShowdownResult};
pub use validation::{legal_actions, validate_action};

/// RNG интерфейс для engine. Реализации – в infra (обёртка над `rand`).
/// Движок сам никогда не берёт случайность из несидируемого источника.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
