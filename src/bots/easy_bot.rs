use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::api::PlayerView;
use crate::bots::{choose_legal, Bot};
use crate::domain::Chips;
use crate::engine::actions::PlayerAction;

/// Простая эвристика без оценки силы руки.
///
/// - есть что уравнивать: fold, если колл дороже `tightness` от стека, иначе call;
/// - ставки нет: с вероятностью `aggression` ставит ~60% банка, иначе check.
#[derive(Clone, Debug)]
pub struct EasyBot {
    name: String,
    tightness: f64,
    aggression: f64,
    rng: StdRng,
}

impl EasyBot {
    pub fn new(tightness: f64, aggression: f64, seed: u64) -> Self {
        Self {
            name: "EasyBot".to_string(),
            tightness,
            aggression,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EasyBot {
    fn default() -> Self {
        Self::new(0.5, 0.5, 42)
    }
}

impl Bot for EasyBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, view: &PlayerView) -> PlayerAction {
        let legal = &view.legal_actions;
        let pick = |wanted| choose_legal(wanted, legal).unwrap_or(wanted);

        let stack = view.stack();
        if !view.to_call.is_zero() {
            if view.to_call.0 as f64 > stack.0 as f64 * self.tightness {
                return pick(PlayerAction::Fold);
            }
            return pick(PlayerAction::Call);
        }

        if self.aggression > self.rng.gen::<f64>() {
            // 60% банка вниз до кратного small blind.
            let step = view.small_blind.0.max(1);
            let target = view.pot.0 * 6 / 10 / step * step;
            return pick(PlayerAction::Bet(Chips(target)));
        }

        pick(PlayerAction::Check)
    }
}
