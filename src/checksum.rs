use core::fmt;
use sha2::{Digest, Sha256};

use crate::utils::bit_at;

/// Leading `entropy_bits / 32` bits of SHA-256 over the entropy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksum {
    digest: [u8; 32],
    len: usize,
}

impl Checksum {
    /// Entropy longer than 8192 bits has no checksum; the caller rejects it.
    pub fn of(entropy: &[u8]) -> Self {
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&Sha256::digest(entropy));

        Self {
            digest,
            len: entropy.len() * 8 / 32,
        }
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bit(&self, i: usize) -> Option<bool> {
        (i < self.len).then(|| bit_at(&self.digest, i))
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| bit_at(&self.digest, i))
    }

    /// Digest bytes covering the checksum. Bits past `len()` in the last
    /// byte are not part of the checksum.
    pub(crate) fn leading_bytes(&self) -> &[u8] {
        &self.digest[..self.len.div_ceil(8)]
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

pub fn checksum_bits(entropy: &[u8]) -> Checksum {
    Checksum::of(entropy)
}
