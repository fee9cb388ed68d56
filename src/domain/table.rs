use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::hand::Street;
use crate::domain::player::PlayerStatus;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Индекс места за столом (0..n-1), по кругу.
pub type SeatIndex = usize;

/// Сколько карманных карт получает каждый игрок.
pub const HOLE_CARDS: usize = 2;

/// Карт борда за раздачу.
pub const BOARD_CARDS: usize = 5;

/// Сколько мест выдерживает одна колода: карманные карты всех плюс борд.
pub const MAX_SEATS: usize = (52 - BOARD_CARDS) / HOLE_CARDS;

/// Число мест, на которое хватит колоды.
pub fn validate_seat_count(seats: usize) -> Result<(), EngineError> {
    if seats < 2 {
        return Err(EngineError::NotEnoughPlayers(seats));
    }
    if seats > MAX_SEATS {
        return Err(EngineError::TooManySeats {
            seats,
            max: MAX_SEATS,
        });
    }
    Ok(())
}

/// Лимит действий за одну раздачу по умолчанию.
pub const DEFAULT_MAX_ACTIONS_PER_HAND: u32 = 1_000;

/// Конфиг стола: блайнды и ограничения движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Сколько решений ботов оркестратор допускает за одну раздачу.
    pub max_actions_per_hand: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: Chips(10),
            big_blind: Chips(20),
            max_actions_per_hand: DEFAULT_MAX_ACTIONS_PER_HAND,
        }
    }
}

impl TableConfig {
    pub fn new(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
            ..Self::default()
        }
    }

    /// SB > 0 (шаг дискретизации ставок), BB >= SB, лимит действий > 0.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.small_blind.is_zero() {
            return Err(EngineError::InvalidConfig("small blind должен быть больше нуля"));
        }
        if self.big_blind < self.small_blind {
            return Err(EngineError::InvalidConfig("big blind не может быть меньше small blind"));
        }
        if self.max_actions_per_hand == 0 {
            return Err(EngineError::InvalidConfig("max_actions_per_hand должен быть больше нуля"));
        }
        Ok(())
    }
}

/// Состояние одной раздачи – единственный источник правды.
///
/// Семантика значения: каждый переход движка принимает `&TableState`
/// и возвращает новый `TableState`.
///
/// Учёт банка: фишки попадают в `pot` в момент ставки/колла/блайнда,
/// а `current_bets` показывает, какая часть банка внесена на текущей улице.
/// Поэтому `sum(stacks) + pot` постоянна в течение всей раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableState {
    pub config: TableConfig,
    /// Ещё не сданные карты.
    pub deck: Deck,
    /// Карманные карты: у всех либо 0, либо ровно `HOLE_CARDS`.
    pub hands: Vec<Vec<Card>>,
    /// Фишки, ещё не отправленные в банк.
    pub stacks: Vec<Chips>,
    /// Сколько внесено на текущей улице.
    pub current_bets: Vec<Chips>,
    pub statuses: Vec<PlayerStatus>,
    /// Ходил ли игрок на этой улице после последнего bet/raise.
    pub acted: Vec<bool>,
    /// Общие карты (0, 3, 4 или 5).
    pub board: Vec<Card>,
    pub street: Street,
    pub pot: Chips,
    pub dealer_index: SeatIndex,
    pub current_player: SeatIndex,
    /// Наибольшая ставка на этой улице – до неё должны дотянуться все.
    pub max_bet: Chips,
    /// Минимальный размер повышающей части рейза.
    pub min_raise: Chips,
    /// Заполняется только после шоудауна.
    pub winners: Vec<SeatIndex>,
}

impl TableState {
    /// Новый стол: перемешанная колода, стеки переносятся как есть.
    pub fn new<R: RandomSource>(
        stacks: Vec<Chips>,
        config: TableConfig,
        dealer_index: SeatIndex,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let n = stacks.len();
        validate_seat_count(n)?;
        if dealer_index >= n {
            return Err(EngineError::InvalidDealer {
                dealer: dealer_index,
                seats: n,
            });
        }

        let min_raise = config.big_blind;
        Ok(Self {
            config,
            deck: Deck::standard_52().shuffled(rng),
            hands: vec![Vec::new(); n],
            stacks,
            current_bets: vec![Chips::ZERO; n],
            statuses: vec![PlayerStatus::Active; n],
            acted: vec![false; n],
            board: Vec::new(),
            street: Street::PreFlop,
            pot: Chips::ZERO,
            dealer_index,
            current_player: dealer_index,
            max_bet: Chips::ZERO,
            min_raise,
            winners: Vec::new(),
        })
    }

    pub fn num_seats(&self) -> usize {
        self.stacks.len()
    }

    pub fn small_blind(&self) -> Chips {
        self.config.small_blind
    }

    pub fn big_blind(&self) -> Chips {
        self.config.big_blind
    }

    /// `sum(stacks) + pot` – сохраняется на протяжении всей раздачи.
    pub fn total_chips(&self) -> Chips {
        self.stacks.iter().sum::<Chips>() + self.pot
    }

    /// Сколько месту нужно доплатить до `max_bet`.
    pub fn to_call(&self, seat: SeatIndex) -> Chips {
        self.max_bet.saturating_sub(self.current_bets[seat])
    }

    pub fn can_act(&self, seat: SeatIndex) -> bool {
        self.statuses[seat].can_act()
    }

    /// Места, которые ещё могут делать ставки (не fold, не all-in).
    pub fn active_seats(&self) -> impl Iterator<Item = SeatIndex> + '_ {
        (0..self.num_seats()).filter(move |&i| self.can_act(i))
    }

    /// Места, претендующие на банк (не fold).
    pub fn seats_in_hand(&self) -> impl Iterator<Item = SeatIndex> + '_ {
        (0..self.num_seats()).filter(move |&i| self.statuses[i].is_in_hand())
    }

    pub fn is_finished(&self) -> bool {
        self.street == Street::Showdown
    }
}

impl fmt::Display for TableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = |cs: &[Card]| {
            cs.iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        writeln!(f, "Street: {}", self.street)?;
        writeln!(f, "Pot: {}", self.pot)?;
        writeln!(f, "Board: {}", cards(&self.board))?;
        writeln!(f, "Max bet: {}", self.max_bet)?;

        for i in 0..self.num_seats() {
            let mut marks = Vec::new();
            if self.winners.contains(&i) || (!self.is_finished() && self.current_player == i) {
                marks.push("->");
            }
            if i == self.dealer_index {
                marks.push("[D]");
            }
            match self.statuses[i] {
                PlayerStatus::Folded => marks.push("(F)"),
                PlayerStatus::AllIn => marks.push("(AI)"),
                PlayerStatus::Active => {}
            }
            writeln!(
                f,
                "Player {i} {:<10} | Hand: {:<5} | Stack: {:<6} | Bet: {}",
                marks.join(" "),
                cards(&self.hands[i]),
                self.stacks[i],
                self.current_bets[i],
            )?;
        }
        Ok(())
    }
}
