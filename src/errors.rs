use hmac::digest::InvalidLength;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Bip39Error {
    #[error("invalid word count: {0} (must be a positive multiple of 3)")]
    InvalidWordCount(usize),

    #[error("mnemonic contains an unknown word (word {0})")]
    InvalidWord(usize),

    #[error("the mnemonic has an invalid checksum")]
    InvalidChecksum,

    #[error("invalid strength: {0} bits (must be a positive multiple of 8)")]
    InvalidStrength(usize),

    #[error("entropy must be a non-empty multiple of 32 bits, at most 8192 bits: {0} bits")]
    BadEntropyBitCount(usize),

    #[error("wordlist must contain exactly 2048 words, got {0}")]
    BadWordlistLength(usize),

    #[error("wordlist contains a duplicate entry (word {0})")]
    DuplicateWord(usize),

    #[error("wordlist entry is empty or contains whitespace (word {0})")]
    BadWordlistEntry(usize),

    #[error("HMAC key error: {0}")]
    HmacError(InvalidLength),

    #[error("seed derivation worker terminated without a result")]
    DerivationAborted,
}

impl From<InvalidLength> for Bip39Error {
    fn from(error: InvalidLength) -> Self {
        Bip39Error::HmacError(error)
    }
}

pub type Result<T> = core::result::Result<T, Bip39Error>;
