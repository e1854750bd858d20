use alloc::{string::ToString, vec, vec::Vec};
use core::fmt;

use crate::{
    checksum::Checksum,
    errors::{Bip39Error, Result},
    normalize::normalize,
    rng::Rng,
    seed::Seed,
    utils::{bit_at, is_invalid_word_count, read_word, word_count_for, write_word, BITS_PER_WORD},
    wordlist::Wordlist,
};

pub const MIN_NB_WORDS: usize = 12;
pub const MAX_NB_WORDS: usize = 24;
pub const DEFAULT_STRENGTH_BITS: usize = 128;
/// A 256-bit digest yields at most 256 checksum bits, one per 32 entropy bits.
pub const MAX_ENTROPY_BITS: usize = 256 * 32;

/// A word sequence drawn from one [`Wordlist`], stored as 11-bit indices.
#[derive(PartialEq, Eq, Clone)]
pub struct Mnemonic<'a> {
    lang_words: &'a Wordlist,
    indicators: Vec<u16>,
}

pub struct MnemonicIter<'a, 'b> {
    mnemonic: &'b Mnemonic<'a>,
    position: usize,
}

impl<'a, 'b> Iterator for MnemonicIter<'a, 'b> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let word_index = *self.mnemonic.indicators.get(self.position)?;
        self.position += 1;
        Some(self.mnemonic.lang_words.word(word_index))
    }
}

impl<'a> fmt::Display for Mnemonic<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, word) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Debug for Mnemonic<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .finish_non_exhaustive()
    }
}

impl<'a> Mnemonic<'a> {
    pub fn iter<'b>(&'b self) -> MnemonicIter<'a, 'b> {
        MnemonicIter {
            mnemonic: self,
            position: 0,
        }
    }

    pub fn word_count(&self) -> usize {
        self.indicators.len()
    }

    /// Whether the length is one of the standard 12, 15, 18, 21 or 24 words.
    pub fn is_standard(&self) -> bool {
        (MIN_NB_WORDS..=MAX_NB_WORDS).contains(&self.word_count())
    }

    pub fn wordlist(&self) -> &'a Wordlist {
        self.lang_words
    }

    /// Encodes entropy followed by its checksum as 11-bit word indices.
    pub fn from_entropy(lang_words: &'a Wordlist, entropy: &[u8]) -> Result<Self> {
        let nb_bytes = entropy.len();
        let nb_bits = nb_bytes * 8;

        if nb_bits == 0 || nb_bits % 32 != 0 || nb_bits > MAX_ENTROPY_BITS {
            return Err(Bip39Error::BadEntropyBitCount(nb_bits));
        }

        let checksum = Checksum::of(entropy);
        let checksum_bytes = checksum.leading_bytes();

        let mut bits = vec![0u8; nb_bytes + checksum_bytes.len()];
        bits[..nb_bytes].copy_from_slice(entropy);
        bits[nb_bytes..].copy_from_slice(checksum_bytes);

        let word_count = word_count_for(nb_bits);
        let indicators = (0..word_count).map(|i| read_word(&bits, i)).collect();
        wipe(bits);

        Ok(Mnemonic {
            lang_words,
            indicators,
        })
    }

    /// Parses and fully validates a phrase.
    ///
    /// The phrase is NFKD-normalized and split on single spaces, so any
    /// other separator leaves a word that is not in the list. Failures are
    /// reported in order: word count, unknown word, checksum.
    pub fn parse(lang_words: &'a Wordlist, phrase: &str) -> Result<Self> {
        let normalized = normalize(Some(phrase));

        let word_count = normalized.split(' ').count();
        if is_invalid_word_count(word_count) {
            return Err(Bip39Error::InvalidWordCount(word_count));
        }

        let mut indicators = Vec::with_capacity(word_count);
        for (i, word) in normalized.split(' ').enumerate() {
            let idx = lang_words
                .index_of(word)
                .ok_or(Bip39Error::InvalidWord(i))?;
            indicators.push(idx);
        }

        let mnemonic = Mnemonic {
            lang_words,
            indicators,
        };
        mnemonic.verify_checksum()?;
        Ok(mnemonic)
    }

    /// Asks `rng` for `strength_bits / 8` bytes and encodes exactly what it
    /// returns.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        lang_words: &'a Wordlist,
        strength_bits: usize,
    ) -> Result<Self> {
        if strength_bits == 0 || strength_bits % 8 != 0 {
            return Err(Bip39Error::InvalidStrength(strength_bits));
        }

        log::debug!("generating mnemonic from {} bits of entropy", strength_bits);

        let entropy = rng.random_bytes(strength_bits / 8);
        if entropy.len() != strength_bits / 8 {
            log::warn!(
                "random source returned {} bytes, expected {}",
                entropy.len(),
                strength_bits / 8
            );
        }

        let mnemonic = Self::from_entropy(lang_words, &entropy);
        wipe(entropy);
        mnemonic
    }

    /// Recovers the entropy. The checksum was verified on construction.
    pub fn to_entropy(&self) -> Vec<u8> {
        let (mut bits, entropy_bits) = self.unpack();
        bits.truncate(entropy_bits / 8);
        bits
    }

    pub fn to_seed(&self, passphrase: &str) -> Result<Seed> {
        Seed::derive(&self.to_string(), passphrase)
    }

    /// Packs the indices into a big-endian bit stream and returns it with
    /// the length of its entropy segment in bits.
    fn unpack(&self) -> (Vec<u8>, usize) {
        let total_bits = self.indicators.len() * BITS_PER_WORD;
        let entropy_bits = total_bits / 33 * 32;

        let mut bits = vec![0u8; total_bits.div_ceil(8)];
        for (i, &idx) in self.indicators.iter().enumerate() {
            write_word(&mut bits, i, idx);
        }
        (bits, entropy_bits)
    }

    fn verify_checksum(&self) -> Result<()> {
        // Too long to carry a checksum drawn from one digest.
        if self.indicators.len() > word_count_for(MAX_ENTROPY_BITS) {
            return Err(Bip39Error::InvalidChecksum);
        }

        let (bits, entropy_bits) = self.unpack();
        let checksum = Checksum::of(&bits[..entropy_bits / 8]);

        let matches = checksum
            .bits()
            .enumerate()
            .all(|(i, bit)| bit == bit_at(&bits, entropy_bits + i));
        wipe(bits);

        if matches {
            Ok(())
        } else {
            Err(Bip39Error::InvalidChecksum)
        }
    }
}

#[cfg(feature = "zeroize")]
fn wipe(mut bytes: Vec<u8>) {
    zeroize::Zeroize::zeroize(&mut bytes);
}

#[cfg(not(feature = "zeroize"))]
fn wipe(_bytes: Vec<u8>) {}
