//! BIP39 mnemonic codes.
//!
//! Converts entropy to and from word sequences carrying a SHA-256 checksum,
//! validates phrases, and stretches a phrase plus passphrase into a 64-byte
//! seed with PBKDF2-HMAC-SHA512.
//!
//! ```
//! use bip39_seed::{entropy_to_mnemonic, mnemonic_to_entropy, default_wordlist};
//!
//! let phrase = entropy_to_mnemonic(&[0x13, 0x37, 0x55, 0xff], default_wordlist()).unwrap();
//! assert_eq!(phrase, "basket rival lemon");
//! assert_eq!(
//!     mnemonic_to_entropy(&phrase, default_wordlist()).unwrap(),
//!     [0x13, 0x37, 0x55, 0xff]
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod checksum;
pub mod errors;
pub mod mnemonic;
pub mod normalize;
pub mod pbkdf2;
pub mod rng;
pub mod seed;
pub mod utils;
pub mod wordlist;

use alloc::{string::String, string::ToString, vec::Vec};

pub use errors::{Bip39Error, Result};
pub use mnemonic::{Mnemonic, DEFAULT_STRENGTH_BITS};
pub use rng::{FnRng, Rng};
pub use seed::Seed;
#[cfg(feature = "std")]
pub use seed::{derive_seed, derive_seed_hex, SeedFuture};
pub use wordlist::Wordlist;

/// The English wordlist.
#[cfg(feature = "std")]
pub fn default_wordlist() -> &'static Wordlist {
    Wordlist::english()
}

pub fn entropy_to_mnemonic(entropy: &[u8], wordlist: &Wordlist) -> Result<String> {
    Mnemonic::from_entropy(wordlist, entropy).map(|mnemonic| mnemonic.to_string())
}

pub fn mnemonic_to_entropy(mnemonic: &str, wordlist: &Wordlist) -> Result<Vec<u8>> {
    Mnemonic::parse(wordlist, mnemonic).map(|mnemonic| mnemonic.to_entropy())
}

/// Generates a phrase from `strength_bits` of fresh CSPRNG output.
#[cfg(feature = "std")]
pub fn generate_mnemonic(strength_bits: usize, wordlist: &Wordlist) -> Result<String> {
    generate_mnemonic_with_rng(strength_bits, &mut rng::secure_rng(), wordlist)
}

pub fn generate_mnemonic_with_rng<R: Rng + ?Sized>(
    strength_bits: usize,
    rng: &mut R,
    wordlist: &Wordlist,
) -> Result<String> {
    Mnemonic::generate(rng, wordlist, strength_bits).map(|mnemonic| mnemonic.to_string())
}

/// `true` if `mnemonic` decodes against `wordlist` with a valid checksum.
pub fn validate_mnemonic(mnemonic: &str, wordlist: &Wordlist) -> bool {
    match Mnemonic::parse(wordlist, mnemonic) {
        Ok(_) => true,
        Err(err) => {
            log::debug!("mnemonic rejected: {}", err);
            false
        }
    }
}
