use log::{debug, info};
use thiserror::Error;

use crate::bots::Bot;
use crate::domain::{Chips, TableState};
use crate::engine::errors::EngineError;
use crate::engine::hand_runner::play_hand;
use crate::eval::BestHandEvaluator;
use crate::infra::RngSeed;
use crate::sim::config::{BotConfig, ConfigError, SimulationConfig};
use crate::sim::stats::{BotStats, SimulationReport};

/// Как часто писать прогресс в лог.
const PROGRESS_EVERY: u64 = 10_000;

/// Номер стола для вывода seed'ов: стол в симуляции один.
const TABLE_INDEX: u64 = 0;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("раздача {hand}: {source}")]
    Engine {
        hand: u64,
        #[source]
        source: EngineError,
    },

    #[error("раздача {hand}: фишки не сошлись, было {expected}, стало {actual}")]
    ChipsNotConserved {
        hand: u64,
        expected: Chips,
        actual: Chips,
    },
}

/// Прогнать `config.hands` независимых раздач и собрать статистику по местам.
pub fn run_hands(config: &SimulationConfig) -> Result<SimulationReport, SimulationError> {
    config.validate()?;

    let mut bots: Vec<Box<dyn Bot>> = config.bots.iter().map(BotConfig::build).collect();
    let n = bots.len();
    let evaluator = BestHandEvaluator;
    let base_seed = RngSeed::from_u64(config.seed);

    let mut stats: Vec<BotStats> = bots.iter().map(|b| BotStats::new(b.name(), n)).collect();

    info!(
        "simulation: {} hands, {} bots, stack {}, blinds {}/{}",
        config.hands, n, config.starting_stack, config.table.small_blind, config.table.big_blind
    );

    for hand in 0..config.hands {
        let dealer = (hand % n as u64) as usize;
        let initial = vec![config.starting_stack; n];
        let expected: Chips = initial.iter().sum();

        let mut rng = base_seed.derive(TABLE_INDEX, hand).to_rng();
        let engine_err = |source| SimulationError::Engine { hand, source };

        let table = TableState::new(initial, config.table.clone(), dealer, &mut rng)
            .map_err(engine_err)?;
        let finished = play_hand(table, &mut bots, &evaluator, &mut rng).map_err(engine_err)?;

        let actual = finished.total_chips();
        if actual != expected {
            return Err(SimulationError::ChipsNotConserved {
                hand,
                expected,
                actual,
            });
        }

        for (seat, stat) in stats.iter_mut().enumerate() {
            let stack = finished.stacks[seat];
            let profit = stack.0 as i64 - config.starting_stack.0 as i64;
            stat.record(profit, dealer, stack.is_zero());
        }

        debug!("hand {hand}: dealer {dealer}, winners {:?}", finished.winners);
        if (hand + 1) % PROGRESS_EVERY == 0 {
            info!("simulation: {} / {} hands", hand + 1, config.hands);
        }
    }

    Ok(SimulationReport {
        hands: config.hands,
        bots: stats,
    })
}
