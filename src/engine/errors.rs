use thiserror::Error;

use crate::domain::{Chips, SeatIndex};

/// Класс ошибки: кто виноват и что с ней делать вызывающему.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Действие не согласуется с текущим состоянием раздачи.
    IllegalAction,
    /// Неверная настройка стола или состава ботов. Фатально на старте.
    Configuration,
    /// Нарушен внутренний инвариант – баг выше по стеку.
    InvariantViolation,
}

/// Ошибки движка покера.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Раздача уже дошла до шоудауна – ставки закрыты")]
    HandAlreadyFinished,

    #[error("Место {0} не может ходить: оно сфолдило или в all-in")]
    PlayerCannotAct(SeatIndex),

    #[error("Fold невозможен – нет ставки, на которую можно сбросить")]
    CannotFold,

    #[error("Невозможно выполнить check – нужно доплатить {to_call}")]
    CannotCheck { to_call: Chips },

    #[error("Невозможно выполнить call – нет ставки для уравнивания")]
    CannotCall,

    #[error("Bet невозможен – ставка на улице уже есть")]
    BetIntoExistingBet,

    #[error("Raise невозможен – на улице ещё нет ставки")]
    RaiseWithoutBet,

    #[error("Размер {amount} не кратен шагу {step}")]
    InvalidAmount { amount: Chips, step: Chips },

    #[error("Размер рейза {amount} меньше минимального {min_raise}")]
    RaiseTooSmall { amount: Chips, min_raise: Chips },

    #[error("Недостаточно фишек: нужно {required}, в стеке {stack}")]
    NotEnoughChips { required: Chips, stack: Chips },

    #[error("Для раздачи нужно минимум 2 игрока с фишками, есть {0}")]
    NotEnoughPlayers(usize),

    #[error("Число ботов ({bots}) не совпадает с числом мест ({seats})")]
    PlayerCountMismatch { bots: usize, seats: usize },

    #[error("Некорректный конфиг стола: {0}")]
    InvalidConfig(&'static str),

    #[error("За столом {seats} мест, колоды хватает максимум на {max}")]
    TooManySeats { seats: usize, max: usize },

    #[error("Дилер {dealer} вне стола из {seats} мест")]
    InvalidDealer { dealer: SeatIndex, seats: usize },

    #[error("На шоудауне нет ни одного активного игрока")]
    NoActivePlayers,

    #[error("В колоде {remaining} карт, запрошено {requested}")]
    DeckExhausted { requested: usize, remaining: usize },

    #[error("Раздача ещё не дошла до шоудауна")]
    HandNotFinished,

    #[error("Превышен лимит действий за раздачу ({0})")]
    ActionLimitExceeded(u32),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl EngineError {
    pub fn category(&self) -> ErrorCategory {
        use EngineError::*;

        match self {
            HandAlreadyFinished
            | PlayerCannotAct(_)
            | CannotFold
            | CannotCheck { .. }
            | CannotCall
            | BetIntoExistingBet
            | RaiseWithoutBet
            | InvalidAmount { .. }
            | RaiseTooSmall { .. }
            | NotEnoughChips { .. } => ErrorCategory::IllegalAction,

            NotEnoughPlayers(_)
            | PlayerCountMismatch { .. }
            | InvalidConfig(_)
            | TooManySeats { .. }
            | InvalidDealer { .. } => ErrorCategory::Configuration,

            NoActivePlayers
            | DeckExhausted { .. }
            | HandNotFinished
            | ActionLimitExceeded(_)
            | Internal(_) => ErrorCategory::InvariantViolation,
        }
    }

    pub fn is_illegal_action(&self) -> bool {
        self.category() == ErrorCategory::IllegalAction
    }
}
