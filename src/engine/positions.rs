use crate::domain::{SeatIndex, TableState};
use crate::engine::errors::EngineError;

/// Следующее место после `start` (по кругу), которое ещё может ходить.
/// Сам `start` проверяется последним.
pub fn next_active_seat(state: &TableState, start: SeatIndex) -> Option<SeatIndex> {
    seats_after(state.num_seats(), start).find(|&seat| state.can_act(seat))
}

/// Места по кругу, начиная со следующего за `start` и заканчивая самим `start`.
pub fn seats_after(n: usize, start: SeatIndex) -> impl Iterator<Item = SeatIndex> {
    (1..=n).map(move |offset| (start + offset) % n)
}

/// Кто ставит small и big blind.
///
/// Участвуют только места с фишками. Хедз-ап: SB ставит дилер
/// (если у него есть фишки), BB – второй игрок. При 3+ игроках: SB – первый
/// после дилера, BB – следующий.
pub fn blind_seats(state: &TableState) -> Result<(SeatIndex, SeatIndex), EngineError> {
    let dealer = state.dealer_index;
    let funded: Vec<SeatIndex> = seats_after(state.num_seats(), dealer)
        .filter(|&seat| !state.stacks[seat].is_zero())
        .collect();

    match funded.as_slice() {
        [] | [_] => Err(EngineError::NotEnoughPlayers(funded.len())),
        [first, second] => {
            if *second == dealer {
                Ok((dealer, *first))
            } else {
                Ok((*first, *second))
            }
        }
        [first, second, ..] => Ok((*first, *second)),
    }
}
