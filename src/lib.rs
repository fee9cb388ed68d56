//! Движок ставок no-limit hold'em для одного стола.
//!
//! Слои:
//!   - `domain` – карты, колода, фишки, состояние стола;
//!   - `engine` – легальные действия, переходы, улицы, шоудаун, оркестратор раздачи;
//!   - `eval` – оценка силы рук;
//!   - `infra` – RNG и seed'ы;
//!   - `api` – то, что видит бот (`PlayerView`);
//!   - `bots` – политики принятия решений;
//!   - `sim` – прогон многих раздач и статистика.

pub mod api;
pub mod bots;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod sim;

pub use domain::{Card, Chips, Street, TableConfig, TableState};
pub use engine::{play_hand, EngineError, PlayerAction};
