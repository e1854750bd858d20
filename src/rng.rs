use alloc::vec::Vec;

/// Source of entropy for [`crate::Mnemonic::generate`].
///
/// Production code must use a cryptographically secure generator. Every
/// `rand::RngCore` qualifies with the `std` feature; see [`secure_rng`].
pub trait Rng {
    /// Returns `len` random bytes. The generator encodes whatever comes
    /// back, so a source returning another length changes the phrase
    /// length or fails encoding.
    fn random_bytes(&mut self, len: usize) -> Vec<u8>;
}

#[cfg(feature = "std")]
impl<R: rand::RngCore + ?Sized> Rng for R {
    fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut bytes = alloc::vec![0u8; len];
        rand::RngCore::fill_bytes(self, &mut bytes);
        bytes
    }
}

/// Adapts a function from a byte count to that many bytes. Its output is
/// passed through unchanged.
pub struct FnRng<F>(pub F);

impl<F> Rng for FnRng<F>
where
    F: FnMut(usize) -> Vec<u8>,
{
    fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        (self.0)(len)
    }
}

/// Thread-local CSPRNG, reseeded from the operating system.
#[cfg(feature = "std")]
pub fn secure_rng() -> rand::rngs::ThreadRng {
    rand::rng()
}
