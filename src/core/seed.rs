use crate::models::Seed;

/// Multiplier applied to every character of a seed key
const SEED_CHAR_WEIGHT: Seed = 13;

/// Derive a stable seed from an arbitrary text key
///
/// The seed is the sum of `code * 13` over the characters of `text`, where
/// `code` is the first UTF-16 code unit of each character. The hash is purely
/// additive, so anagrams collide. Saved seeds depend on the exact arithmetic,
/// so it must not be swapped for a stronger hash.
///
/// # Examples
/// ```
/// use lume_quest::core::seed::derive_seed;
///
/// assert_eq!(derive_seed(""), 0);
/// assert_eq!(derive_seed("ab"), 2535);
/// ```
pub fn derive_seed(text: &str) -> Seed {
    text.chars()
        .map(|c| Seed::from(first_code_unit(c)) * SEED_CHAR_WEIGHT)
        .sum()
}

/// Sum of all UTF-16 code units of `text`
#[inline]
pub fn code_unit_sum(text: &str) -> Seed {
    text.encode_utf16().map(Seed::from).sum()
}

#[inline]
fn first_code_unit(c: char) -> u16 {
    let mut buf = [0u16; 2];
    c.encode_utf16(&mut buf)[0]
}

/// Seeded fraction in [0, 1) with two decimal places of resolution
///
/// `((seed + offset * 31) mod 100) / 100`, used for cheap per-avatar variation.
#[inline]
pub fn seeded_fraction(seed: Seed, offset: u64) -> f64 {
    (seed.wrapping_add(offset * 31) % 100) as f64 / 100.0
}

/// Mulberry32 pseudo-random generator
///
/// Produces a reproducible stream of floats in [0, 1) for a given 32-bit seed.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_seed_empty() {
        assert_eq!(derive_seed(""), 0);
    }

    #[test]
    fn test_derive_seed_known_values() {
        assert_eq!(derive_seed("ab"), 97 * 13 + 98 * 13);
        assert_eq!(derive_seed("a"), 1261);
    }

    #[test]
    fn test_derive_seed_is_order_insensitive() {
        assert_eq!(derive_seed("abc"), derive_seed("cab"));
    }

    #[test]
    fn test_derive_seed_astral_uses_high_surrogate() {
        // U+1F600 encodes as 0xD83D 0xDE00
        assert_eq!(derive_seed("\u{1F600}"), 0xD83D * 13);
        assert_eq!(code_unit_sum("\u{1F600}"), 0xD83D + 0xDE00);
    }

    #[test]
    fn test_code_unit_sum() {
        assert_eq!(code_unit_sum("cozy"), 453);
        assert_eq!(code_unit_sum(""), 0);
    }

    #[test]
    fn test_seeded_fraction() {
        assert_eq!(seeded_fraction(0, 0), 0.0);
        assert_eq!(seeded_fraction(100, 2), 0.62);
        assert!(seeded_fraction(12345, 7) < 1.0);
    }

    #[test]
    fn test_mulberry_is_reproducible() {
        let a: Vec<f64> = Mulberry32::new(20260301).take(16).collect();
        let b: Vec<f64> = Mulberry32::new(20260301).take(16).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mulberry_range() {
        for value in Mulberry32::new(7).take(1000) {
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_mulberry_seeds_diverge() {
        let a: Vec<f64> = Mulberry32::new(1).take(4).collect();
        let b: Vec<f64> = Mulberry32::new(2).take(4).collect();
        assert_ne!(a, b);
    }
}
