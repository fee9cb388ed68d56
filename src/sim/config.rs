use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bots::{Bot, EasyBot, RandomBot};
use crate::domain::{validate_seat_count, Chips, TableConfig};
use crate::engine::errors::EngineError;

/// Описание одного бота в составе симуляции.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BotConfig {
    Random {
        seed: u64,
    },
    Easy {
        tightness: f64,
        aggression: f64,
        seed: u64,
    },
}

impl BotConfig {
    pub fn build(&self) -> Box<dyn Bot> {
        match *self {
            BotConfig::Random { seed } => Box::new(RandomBot::new(seed)),
            BotConfig::Easy {
                tightness,
                aggression,
                seed,
            } => Box::new(EasyBot::new(tightness, aggression, seed)),
        }
    }
}

/// Параметры прогона: сколько раздач, стартовый стек, ставки, состав ботов.
///
/// Каждая раздача начинается со свежих стеков `starting_stack`, кнопка
/// двигается по кругу `hand % n`, колода раздачи выводится из `seed`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub hands: u64,
    pub starting_stack: Chips,
    pub table: TableConfig,
    pub seed: u64,
    pub bots: Vec<BotConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let mut bots: Vec<BotConfig> = (0..4).map(|seed| BotConfig::Random { seed }).collect();
        bots.push(BotConfig::Easy {
            tightness: 0.5,
            aggression: 0.5,
            seed: 42,
        });

        Self {
            hands: 10_000,
            starting_stack: Chips(1_000),
            table: TableConfig::default(),
            seed: 42,
            bots,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("некорректный JSON конфига: {0}")]
    Json(#[from] serde_json::Error),

    #[error("некорректные параметры стола: {0}")]
    Table(#[from] EngineError),

    #[error("некорректный конфиг симуляции: {0}")]
    Invalid(&'static str),
}

impl SimulationConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.table.validate()?;

        if self.hands == 0 {
            return Err(ConfigError::Invalid("hands должен быть больше нуля"));
        }
        if self.bots.len() < 2 {
            return Err(ConfigError::Invalid("нужно минимум два бота"));
        }
        validate_seat_count(self.bots.len())?;
        if self.starting_stack.is_zero() {
            return Err(ConfigError::Invalid("starting_stack должен быть больше нуля"));
        }

        let in_unit = |x: f64| (0.0..=1.0).contains(&x);
        for bot in &self.bots {
            if let BotConfig::Easy {
                tightness,
                aggression,
                ..
            } = *bot
            {
                if !in_unit(tightness) || !in_unit(aggression) {
                    return Err(ConfigError::Invalid(
                        "tightness и aggression должны лежать в [0, 1]",
                    ));
                }
            }
        }
        Ok(())
    }
}
