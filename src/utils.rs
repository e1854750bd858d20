/// Width of one word index in the packed bit stream.
pub const BITS_PER_WORD: usize = 11;

/// Number of words that encode `entropy_bits` of entropy plus its checksum.
#[inline]
pub fn word_count_for(entropy_bits: usize) -> usize {
    (entropy_bits + entropy_bits / 32) / BITS_PER_WORD
}

#[inline]
pub fn is_invalid_word_count(word_count: usize) -> bool {
    word_count == 0 || word_count % 3 != 0
}

/// Reads bit `i` of `bytes`, most significant bit first.
#[inline]
pub fn bit_at(bytes: &[u8], i: usize) -> bool {
    bytes[i / 8] & (0x80 >> (i % 8)) != 0
}

/// Reads the `word`-th 11-bit group of a big-endian bit stream.
pub fn read_word(bytes: &[u8], word: usize) -> u16 {
    let start = word * BITS_PER_WORD;
    let mut idx = 0u16;
    for j in 0..BITS_PER_WORD {
        if bit_at(bytes, start + j) {
            idx |= 1 << (BITS_PER_WORD - 1 - j);
        }
    }
    idx
}

/// ORs `value` into the `word`-th 11-bit group. The target bits must be zero.
pub fn write_word(bytes: &mut [u8], word: usize, value: u16) {
    let start = word * BITS_PER_WORD;
    for j in 0..BITS_PER_WORD {
        if value & (1 << (BITS_PER_WORD - 1 - j)) != 0 {
            let i = start + j;
            bytes[i / 8] |= 0x80 >> (i % 8);
        }
    }
}
