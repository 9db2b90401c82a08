//! Свойства classify / compare на случайных руках.
//!
//! Руки генерируются детерминированным `StdRng`, дубликаты карт допустимы
//! (легальность колоды не проверяется).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use poker_showdown::domain::card::{Card, Rank, Suit};
use poker_showdown::domain::hand::Hand;
use poker_showdown::eval::{classify, compare, matching_categories, Verdict};

const SEED: u64 = 0x5EED_CAFE;
const ROUNDS: usize = 5_000;

fn random_card(rng: &mut StdRng) -> Card {
    let rank = Rank::ALL[rng.gen_range(0..Rank::COUNT)];
    let suit = Suit::ALL[rng.gen_range(0..Suit::ALL.len())];
    Card::new(rank, suit)
}

fn random_hand(rng: &mut StdRng) -> Hand {
    Hand::new([
        random_card(rng),
        random_card(rng),
        random_card(rng),
        random_card(rng),
        random_card(rng),
    ])
}

#[test]
fn classify_is_strongest_matching_category() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let hand = random_hand(&mut rng);
        let matches = matching_categories(&hand);
        let strongest = matches.iter().copied().max();
        assert_eq!(strongest, Some(classify(&hand)), "[{hand}]");
    }
}

#[test]
fn compare_is_reflexive() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 1);
    for _ in 0..ROUNDS {
        let hand = random_hand(&mut rng);
        assert_eq!(compare(&hand, &hand), Verdict::Draw, "[{hand}]");
    }
}

#[test]
fn compare_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 2);
    for _ in 0..ROUNDS {
        let a = random_hand(&mut rng);
        let b = random_hand(&mut rng);
        assert_eq!(compare(&a, &b), compare(&b, &a).swapped(), "[{a}] vs [{b}]");
    }
}

#[test]
fn winner_iff_categories_differ() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 3);
    for _ in 0..ROUNDS {
        let a = random_hand(&mut rng);
        let b = random_hand(&mut rng);
        let (cat_a, cat_b) = (classify(&a), classify(&b));
        let verdict = compare(&a, &b);

        if cat_a == cat_b {
            assert!(verdict.is_draw(), "[{a}] vs [{b}]");
        } else {
            assert_eq!(verdict.category(), Some(cat_a.max(cat_b)), "[{a}] vs [{b}]");
        }
    }
}
