// src/generators/sampler.rs
use super::alphabet::Alphabet;
use super::random::SecureRandom;
use super::{GeneratorError, Result};

/// Draw `length` characters from `alphabet`, uniformly and with replacement.
///
/// Draws are independent, so there is no guarantee every character class in
/// the alphabet shows up in the output.
pub fn sample<R: SecureRandom + ?Sized>(
    rng: &mut R,
    alphabet: &Alphabet,
    length: usize,
) -> Result<Vec<char>> {
    if length == 0 {
        return Ok(Vec::new());
    }
    if alphabet.is_empty() {
        return Err(GeneratorError::InvalidAlphabet);
    }

    let chars = alphabet.as_slice();
    let mut out = Vec::with_capacity(length);
    for _ in 0..length {
        let idx = rng.index(chars.len())?;
        out.push(chars[idx]);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::alphabet::build_alphabet;
    use crate::generators::random::BrokenRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_exact_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let alphabet = build_alphabet(true, true);
        for length in [1, 6, 12, 100, 250] {
            let drawn = sample(&mut rng, &alphabet, length).unwrap();
            assert_eq!(drawn.len(), length);
            assert!(drawn.iter().all(|c| alphabet.contains(*c)));
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        let mut rng = StdRng::seed_from_u64(2);
        let drawn = sample(&mut rng, &build_alphabet(false, false), 0).unwrap();
        assert!(drawn.is_empty());

        // Nothing is drawn, so an empty alphabet is acceptable here.
        let drawn = sample(&mut rng, &Alphabet::from_chars(Vec::new()), 0).unwrap();
        assert!(drawn.is_empty());
    }

    #[test]
    fn test_empty_alphabet_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = sample(&mut rng, &Alphabet::from_chars(Vec::new()), 8);
        assert!(matches!(result, Err(GeneratorError::InvalidAlphabet)));
    }

    #[test]
    fn test_single_char_alphabet() {
        let mut rng = StdRng::seed_from_u64(4);
        let drawn = sample(&mut rng, &Alphabet::from_chars("x".chars()), 5).unwrap();
        assert_eq!(drawn, vec!['x'; 5]);
    }

    #[test]
    fn test_entropy_failure_aborts_sampling() {
        let result = sample(&mut BrokenRng, &build_alphabet(true, true), 12);
        assert!(matches!(result, Err(GeneratorError::RandomSource(_))));
    }

    #[test]
    fn test_sampling_is_uniform() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let alphabet = build_alphabet(true, true);
        let per_char = 1_000usize;
        let draws = alphabet.len() * per_char;

        let drawn = sample(&mut rng, &alphabet, draws).unwrap();
        let mut counts = vec![0usize; alphabet.len()];
        for c in drawn {
            let idx = alphabet.as_slice().iter().position(|a| *a == c).unwrap();
            counts[idx] += 1;
        }

        let expected = per_char as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // 80 degrees of freedom; 140 is far beyond the 0.1% critical value.
        assert!(chi_square < 140.0, "chi-square too high: {}", chi_square);

        for &observed in &counts {
            let ratio = observed as f64 / expected;
            assert!((0.8..1.2).contains(&ratio), "biased count: {}", observed);
        }
    }
}
