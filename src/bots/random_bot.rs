use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::api::PlayerView;
use crate::bots::Bot;
use crate::engine::actions::PlayerAction;

/// Выбирает случайное легальное действие (равновероятно по списку).
#[derive(Clone, Debug)]
pub struct RandomBot {
    name: String,
    rng: StdRng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            name: "RandomBot".to_string(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, view: &PlayerView) -> PlayerAction {
        view.legal_actions
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PlayerAction::Check)
    }
}
