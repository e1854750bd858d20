use proptest::prelude::*;

use bip39_seed::{
    default_wordlist, entropy_to_mnemonic, generate_mnemonic_with_rng, mnemonic_to_entropy,
    validate_mnemonic, FnRng,
};

fn standard_entropy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn entropy_round_trip(entropy in standard_entropy()) {
        let mnemonic = entropy_to_mnemonic(&entropy, default_wordlist()).unwrap();
        prop_assert_eq!(mnemonic_to_entropy(&mnemonic, default_wordlist()).unwrap(), entropy);
    }

    #[test]
    fn word_count_law(entropy in standard_entropy()) {
        let bits = entropy.len() * 8;
        let mnemonic = entropy_to_mnemonic(&entropy, default_wordlist()).unwrap();
        let words = mnemonic.split(' ').count();
        prop_assert_eq!(words, (bits + bits / 32) / 11);
        prop_assert_eq!(words % 3, 0);
    }

    #[test]
    fn any_multiple_of_four_bytes_round_trips(groups in 1usize..40, byte in any::<u8>()) {
        let entropy = vec![byte; groups * 4];
        let mnemonic = entropy_to_mnemonic(&entropy, default_wordlist()).unwrap();
        prop_assert_eq!(mnemonic.split(' ').count(), groups * 3);
        prop_assert_eq!(mnemonic_to_entropy(&mnemonic, default_wordlist()).unwrap(), entropy);
    }

    #[test]
    fn generated_mnemonics_validate(entropy in standard_entropy()) {
        let strength = entropy.len() * 8;
        let source = entropy.clone();
        let mut rng = FnRng(move |n: usize| source[..n].to_vec());
        let mnemonic = generate_mnemonic_with_rng(strength, &mut rng, default_wordlist()).unwrap();
        prop_assert!(validate_mnemonic(&mnemonic, default_wordlist()));
        prop_assert_eq!(mnemonic, entropy_to_mnemonic(&entropy, default_wordlist()).unwrap());
    }

    #[test]
    fn swapping_a_word_is_usually_detected(entropy in standard_entropy(), pos in 0usize..12, shift in 1u16..2048) {
        let english = default_wordlist();
        let mnemonic = entropy_to_mnemonic(&entropy, english).unwrap();
        let mut words: Vec<&str> = mnemonic.split(' ').collect();
        let idx = english.index_of(words[pos]).unwrap();
        words[pos] = english.get((idx + shift) % 2048).unwrap();
        let altered = words.join(" ");

        // A changed word either changes the entropy or breaks the checksum.
        match mnemonic_to_entropy(&altered, english) {
            Ok(decoded) => prop_assert_ne!(decoded, entropy),
            Err(_) => prop_assert!(!validate_mnemonic(&altered, english)),
        }
    }
}

#[test]
fn every_byte_value_round_trips_at_every_standard_length() {
    let english = default_wordlist();
    for len in [16usize, 20, 24, 28, 32] {
        for byte in 0..=255u8 {
            let entropy = vec![byte; len];
            let mnemonic = entropy_to_mnemonic(&entropy, english).unwrap();
            assert_eq!(mnemonic_to_entropy(&mnemonic, english).unwrap(), entropy);
        }
    }
}
