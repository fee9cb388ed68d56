//! Внешний интерфейс для ботов: наблюдаемое состояние стола.

pub mod dto;

pub use dto::*;
