//! Боты – политики принятия решений.
//!
//! Бот получает `PlayerView` и возвращает действие. Действие может оказаться
//! нелегальным: движок его проверит, а оркестратор подставит запасной вариант.

pub mod easy_bot;
pub mod random_bot;

pub use easy_bot::EasyBot;
pub use random_bot::RandomBot;

use crate::api::PlayerView;
use crate::engine::actions::PlayerAction;

/// Контракт бота.
pub trait Bot {
    /// Имя для отчётов.
    fn name(&self) -> &str;

    /// Решение для текущего хода.
    fn decide(&mut self, view: &PlayerView) -> PlayerAction;
}

/// Вернуть `wanted`, если оно есть среди легальных, иначе последнее легальное.
/// `None` – только если легальных действий нет вообще.
pub fn choose_legal(wanted: PlayerAction, legal: &[PlayerAction]) -> Option<PlayerAction> {
    if legal.contains(&wanted) {
        Some(wanted)
    } else {
        legal.last().copied()
    }
}
