use hmac::{Hmac, Mac};
use sha2::{Digest, Sha512};

use crate::errors::Bip39Error;

#[inline]
fn xor(a: &mut [u8], b: &[u8]) {
    for (a_byte, b_byte) in a.iter_mut().zip(b.iter()) {
        *a_byte ^= *b_byte;
    }
}

/// PBKDF2 with HMAC-SHA512 as the PRF.
///
/// The salt is the concatenation of `salt`, passed in parts so callers can
/// prefix it without building a new buffer. Fills all of `result`.
pub fn pbkdf2(
    password: &[u8],
    salt: &[&[u8]],
    c: u32,
    result: &mut [u8],
) -> Result<(), Bip39Error> {
    let prf = Hmac::<Sha512>::new_from_slice(password)?;
    let h_len = <Sha512 as Digest>::output_size();

    for (i, chunk) in result.chunks_mut(h_len).enumerate() {
        let i_be = ((i + 1) as u32).to_be_bytes();

        let mut mac = prf.clone();
        for part in salt {
            mac.update(part);
        }
        mac.update(&i_be);
        let mut u = mac.finalize().into_bytes();

        let len = chunk.len();
        chunk.copy_from_slice(&u[..len]);

        for _ in 1..c {
            let mut mac = prf.clone();
            mac.update(&u);
            u = mac.finalize().into_bytes();
            xor(chunk, &u);
        }
    }
    Ok(())
}
