//! Прогон многих раздач с фиксированным составом ботов и сбор статистики:
//! средний профит с 99% интервалом, доля выигранных раздач, доля банкротств
//! и профит в зависимости от позиции кнопки.

pub mod config;
pub mod runner;
pub mod stats;

pub use config::{BotConfig, ConfigError, SimulationConfig};
pub use runner::{run_hands, SimulationError};
pub use stats::{BotStats, RunningStats, SimulationReport, Z_99};
