//! Dice, coin and joke replies

use rand::seq::IndexedRandom;
use rand::Rng;
use strum::Display;

use super::Reply;

pub const JOKES: [&str; 3] = [
    "Why do programmers prefer dark mode? Because light attracts bugs! 🐛",
    "Why did the developer go broke? Because he used up all his cache! 💸",
    "Why do Python programmers wear glasses? Because they can't C! 👓",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    fn emoji(self) -> &'static str {
        match self {
            CoinSide::Heads => "👑",
            CoinSide::Tails => "🪙",
        }
    }
}

/// A die in 1..=6 and a number in 1..=100, drawn independently
pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> (u8, u8) {
    (rng.random_range(1..=6), rng.random_range(1..=100))
}

pub fn flip<R: Rng + ?Sized>(rng: &mut R) -> CoinSide {
    if rng.random_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}

pub fn random_reply<R: Rng + ?Sized>(rng: &mut R) -> Reply {
    let (dice, number) = roll(rng);
    Reply::markdown(format!("🎲 *Dice:* {}\n🔢 *Number:* {}", dice, number))
}

pub fn coin_reply<R: Rng + ?Sized>(rng: &mut R) -> Reply {
    let side = flip(rng);
    Reply::markdown(format!("{} *Coin:* {}", side.emoji(), side))
}

pub fn joke_reply<R: Rng + ?Sized>(rng: &mut R) -> Reply {
    let joke = JOKES.choose(rng).copied().unwrap_or(JOKES[0]);
    Reply::plain(joke)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_roll_covers_full_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut dice = HashSet::new();
        let mut numbers = HashSet::new();
        for _ in 0..20_000 {
            let (d, n) = roll(&mut rng);
            assert!((1..=6).contains(&d));
            assert!((1..=100).contains(&n));
            dice.insert(d);
            numbers.insert(n);
        }
        assert_eq!(dice.len(), 6);
        assert_eq!(numbers.len(), 100);
    }

    #[test]
    fn test_flip_yields_both_sides() {
        let mut rng = StdRng::seed_from_u64(11);
        let heads = (0..1_000).filter(|_| flip(&mut rng) == CoinSide::Heads).count();
        assert!(heads > 350 && heads < 650, "heads = {}", heads);
    }

    #[test]
    fn test_coin_reply_is_heads_or_tails() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let seen = coin_reply(&mut rng).plain_text();
            assert!(seen == "👑 Coin: Heads" || seen == "🪙 Coin: Tails", "{}", seen);
        }
    }

    #[test]
    fn test_random_reply_format() {
        let mut rng = StdRng::seed_from_u64(5);
        let seen = random_reply(&mut rng).plain_text();
        let mut lines = seen.lines();
        let dice: u8 = lines.next().unwrap().trim_start_matches("🎲 Dice: ").parse().unwrap();
        let number: u8 = lines.next().unwrap().trim_start_matches("🔢 Number: ").parse().unwrap();
        assert!((1..=6).contains(&dice));
        assert!((1..=100).contains(&number));
    }

    #[test]
    fn test_joke_reply_picks_every_joke() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<String> = (0..200).map(|_| joke_reply(&mut rng).text).collect();
        assert_eq!(seen.len(), JOKES.len());
        assert!(seen.iter().all(|j| JOKES.contains(&j.as_str())));
    }
}
