use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::SeatIndex;

/// z-оценка для двустороннего 99% доверительного интервала.
pub const Z_99: f64 = 2.58;

/// Онлайн-среднее и дисперсия (Welford), без хранения выборки.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Стандартное отклонение генеральной совокупности.
    pub fn pstdev(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.m2 / self.count as f64).sqrt()
    }

    /// Полуширина 99% интервала для среднего: `Z_99 * pstdev / sqrt(n)`.
    pub fn ci99(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        Z_99 * self.pstdev() / (self.count as f64).sqrt()
    }
}

/// Накопленная статистика одного бота (одного места).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BotStats {
    pub name: String,
    /// Профит за раздачу относительно стартового стека.
    pub profit: RunningStats,
    pub wins: u64,
    pub busts: u64,
    /// Профит в зависимости от того, кто был на кнопке.
    pub by_dealer: Vec<RunningStats>,
}

impl BotStats {
    pub fn new(name: impl Into<String>, seats: usize) -> Self {
        Self {
            name: name.into(),
            profit: RunningStats::default(),
            wins: 0,
            busts: 0,
            by_dealer: vec![RunningStats::default(); seats],
        }
    }

    pub fn record(&mut self, profit: i64, dealer: SeatIndex, busted: bool) {
        self.profit.push(profit as f64);
        if let Some(slot) = self.by_dealer.get_mut(dealer) {
            slot.push(profit as f64);
        }
        if profit > 0 {
            self.wins += 1;
        }
        if busted {
            self.busts += 1;
        }
    }

    pub fn hands(&self) -> u64 {
        self.profit.count()
    }

    pub fn win_rate(&self) -> f64 {
        ratio(self.wins, self.hands())
    }

    pub fn bust_rate(&self) -> f64 {
        ratio(self.busts, self.hands())
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Итог прогона: по одной записи на место.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimulationReport {
    pub hands: u64,
    pub bots: Vec<BotStats>,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<16} | {:<21} | Win rate | Bust rate",
            "Bot Name", "Avg P&L (99% CI)"
        )?;
        writeln!(f, "{}", "-".repeat(64))?;
        for (seat, bot) in self.bots.iter().enumerate() {
            let label = format!("{seat}:{}", bot.name);
            writeln!(
                f,
                "{:<16} | {:>10.3} ± {:>8.2} | {:>8.3} | {:>9.3}",
                label,
                bot.profit.mean(),
                bot.profit.ci99(),
                bot.win_rate(),
                bot.bust_rate(),
            )?;
        }

        writeln!(f)?;
        writeln!(f, "=== POSITIONAL EV (dealer-relative) ===")?;
        let header: Vec<String> = (0..self.bots.len()).map(|d| format!("D{d:<19}")).collect();
        writeln!(f, "{:<5} | {}", "", header.join(" | "))?;
        for (seat, bot) in self.bots.iter().enumerate() {
            let cells: Vec<String> = bot
                .by_dealer
                .iter()
                .map(|s| {
                    if s.count() == 0 {
                        format!("{:<20}", "N/A")
                    } else {
                        format!("{:>8.2} ± {:>8.2} ", s.mean(), s.ci99())
                    }
                })
                .collect();
            writeln!(f, "P{seat:<4} | {}", cells.join(" | "))?;
        }
        Ok(())
    }
}
