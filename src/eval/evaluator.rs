use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;

use super::hand_rank::HandCategory;

/// Вычислить лучшую руку из hole + board.
///
/// Для 5–7 карт перебираются все 5-карточные комбинации.
/// Меньше 5 карт (борд ещё не открыт) – оцениваются те, что есть:
/// пары/сеты/каре и старшие карты, без стритов и флешей.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    if all_cards.len() <= 5 {
        return evaluate_cards(&all_cards);
    }

    let n = all_cards.len();
    let mut best = HandRank(0);
    let mut five = [all_cards[0]; 5];

    // Все сочетания индексов a < b < c < d < e.
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        five[0] = all_cards[a];
                        five[1] = all_cards[b];
                        five[2] = all_cards[c];
                        five[3] = all_cards[d];
                        five[4] = all_cards[e];
                        best = best.max(evaluate_cards(&five));
                    }
                }
            }
        }
    }

    best
}

/// Оценка не более чем 5 карт.
fn evaluate_cards(cards: &[Card]) -> HandRank {
    // (ранг, сколько раз) – сначала по количеству, затем по рангу, по убыванию.
    let mut groups: Vec<(Rank, u8)> = Vec::with_capacity(5);
    for card in cards {
        match groups.iter_mut().find(|(r, _)| *r == card.rank) {
            Some((_, count)) => *count += 1,
            None => groups.push((card.rank, 1)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let ranks: Vec<Rank> = groups.iter().map(|(r, _)| *r).collect();
    let counts: Vec<u8> = groups.iter().map(|(_, c)| *c).collect();

    let is_five = cards.len() == 5;
    let is_flush = is_five && cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = if is_five && counts.len() == 5 {
        detect_straight(&ranks)
    } else {
        None
    };

    let category = match (counts.as_slice(), is_flush, straight_high) {
        (_, true, Some(_)) => HandCategory::StraightFlush,
        ([4, ..], _, _) => HandCategory::FourOfAKind,
        ([3, 2], _, _) => HandCategory::FullHouse,
        (_, true, None) => HandCategory::Flush,
        (_, false, Some(_)) => HandCategory::Straight,
        ([3, ..], _, _) => HandCategory::ThreeOfAKind,
        ([2, 2, ..], _, _) => HandCategory::TwoPair,
        ([2, ..], _, _) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match straight_high {
        // Для стрита важна только старшая карта (у колеса это пятёрка).
        Some(high) if matches!(category, HandCategory::Straight | HandCategory::StraightFlush) => {
            HandRank::from_category_and_ranks(category, &[high])
        }
        _ => HandRank::from_category_and_ranks(category, &ranks),
    }
}

/// Старшая карта стрита для 5 различных рангов по убыванию.
/// Колесо A-2-3-4-5 считается стритом до пятёрки.
fn detect_straight(desc: &[Rank]) -> Option<Rank> {
    let values: Vec<u8> = desc.iter().map(|r| r.value()).collect();
    if values.windows(2).all(|w| w[0] == w[1] + 1) {
        return Some(desc[0]);
    }
    if values == [14, 5, 4, 3, 2] {
        return Some(Rank::Five);
    }
    None
}
