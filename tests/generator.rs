use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use rust_passgen::core::GeneratorSession;
use rust_passgen::generators::{
    build_alphabet, sample, Alphabet, GeneratorError, PasswordGenerator, DIGITS, LETTERS, SYMBOLS,
};
use rust_passgen::models::PasswordConfig;

#[test]
fn every_valid_length_is_honoured() {
    let generator = PasswordGenerator::with_rng(StdRng::seed_from_u64(2024));
    for length in PasswordConfig::MIN_LENGTH..=PasswordConfig::MAX_LENGTH {
        for (digits, symbols) in [(false, false), (true, false), (false, true), (true, true)] {
            let password = generator
                .generate(&PasswordConfig::new(length, digits, symbols))
                .unwrap();
            assert_eq!(password.len(), length);
        }
    }
}

#[test]
fn letters_only_passwords_stay_in_letter_block() {
    let generator = PasswordGenerator::new();
    for _ in 0..50 {
        let password = generator
            .generate(&PasswordConfig::new(100, false, false))
            .unwrap();
        assert!(password.as_str().chars().all(|c| LETTERS.contains(c)));
    }
}

#[test]
fn full_alphabet_has_81_distinct_characters() {
    let alphabet = build_alphabet(true, true);
    let distinct: HashSet<char> = alphabet.as_slice().iter().copied().collect();
    assert_eq!(alphabet.len(), 81);
    assert_eq!(distinct.len(), 81);

    let generator = PasswordGenerator::new();
    let password = generator.generate(&PasswordConfig::new(100, true, true)).unwrap();
    assert!(password.as_str().chars().all(|c| distinct.contains(&c)));
}

#[test]
fn twelve_character_scenario() {
    let generator = PasswordGenerator::new();
    let password = generator
        .generate(&PasswordConfig::new(12, true, true))
        .unwrap();

    let allowed = format!("{}{}{}", LETTERS, DIGITS, SYMBOLS);
    assert_eq!(allowed, "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*-_+=[]{}~\\`");
    assert_eq!(password.len(), 12);
    assert!(password.as_str().chars().all(|c| allowed.contains(c)));
}

#[test]
fn boundary_lengths() {
    let generator = PasswordGenerator::new();
    assert_eq!(generator.generate(&PasswordConfig::new(6, false, false)).unwrap().len(), 6);
    assert_eq!(generator.generate(&PasswordConfig::new(100, false, false)).unwrap().len(), 100);

    assert!(matches!(
        generator.generate(&PasswordConfig::new(5, true, true)),
        Err(GeneratorError::InvalidLength { length: 5, .. })
    ));
    assert!(matches!(
        generator.generate(&PasswordConfig::new(101, true, false)),
        Err(GeneratorError::InvalidLength { length: 101, .. })
    ));
}

#[test]
fn repeated_calls_produce_different_passwords() {
    let generator = PasswordGenerator::new();
    let config = PasswordConfig::new(6, false, false);
    let seen: HashSet<String> = (0..20)
        .map(|_| generator.generate(&config).unwrap().into_string())
        .collect();
    // 52^6 possibilities; a handful of collisions would already be suspicious.
    assert!(seen.len() >= 19);
}

#[test]
fn sampler_rejects_empty_alphabet() {
    let mut rng = StdRng::seed_from_u64(1);
    let empty = Alphabet::from_chars(Vec::new());
    assert!(matches!(
        sample(&mut rng, &empty, 1),
        Err(GeneratorError::InvalidAlphabet)
    ));
}

#[test]
fn session_regenerates_on_each_change() {
    let generator = Arc::new(PasswordGenerator::new());
    let mut session =
        GeneratorSession::new(generator, PasswordConfig::default(), Duration::from_millis(3000))
            .unwrap();

    let first = session.password().clone();
    session.set_length(40).unwrap();
    let second = session.password().clone();
    assert_ne!(first, second);
    assert_eq!(second.len(), 40);

    session.toggle_symbols().unwrap();
    assert_ne!(session.password(), &second);
    assert!(!session.config().include_symbols);

    let copied = session.copy().to_string();
    assert_eq!(copied, session.password().as_str());
    assert!(session.is_copied());
}
