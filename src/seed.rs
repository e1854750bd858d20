use alloc::string::String;
use core::fmt;

use crate::{errors::Result, normalize::normalize, pbkdf2::pbkdf2};

pub const SEED_BYTE_LEN: usize = 64;
pub const PBKDF2_ROUNDS: u32 = 2048;

const SALT_PREFIX: &str = "mnemonic";

/// The 64-byte root key material derived from a mnemonic and passphrase.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize", derive(zeroize::Zeroize, zeroize::ZeroizeOnDrop))]
pub struct Seed([u8; SEED_BYTE_LEN]);

impl Seed {
    /// Stretches `mnemonic` and `passphrase` with PBKDF2-HMAC-SHA512.
    ///
    /// Both inputs are NFKD-normalized first. The mnemonic is not checked
    /// against any wordlist, so any text can be stretched. Blocks for the
    /// 2048 rounds; see [`derive_seed`] for the asynchronous form.
    pub fn derive(mnemonic: &str, passphrase: &str) -> Result<Self> {
        let mnemonic = normalize(Some(mnemonic));
        let passphrase = normalize(Some(passphrase));

        let mut seed = [0u8; SEED_BYTE_LEN];
        pbkdf2(
            mnemonic.as_bytes(),
            &[SALT_PREFIX.as_bytes(), passphrase.as_bytes()],
            PBKDF2_ROUNDS,
            &mut seed,
        )?;
        Ok(Seed(seed))
    }

    pub fn as_bytes(&self) -> &[u8; SEED_BYTE_LEN] {
        &self.0
    }

    /// Lowercase hex, 128 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

#[cfg(feature = "std")]
pub use self::worker::{derive_seed, derive_seed_hex, SeedFuture};

#[cfg(feature = "std")]
mod worker {
    use std::{
        future::Future,
        pin::Pin,
        task::{Context, Poll},
        thread,
    };

    use tokio::sync::oneshot;

    use super::Seed;
    use crate::{
        errors::{Bip39Error, Result},
        normalize::normalize,
    };

    /// Resolves to the outcome of a seed derivation running on its own
    /// thread. Works under any executor.
    ///
    /// Dropping the future does not stop the derivation; its result is
    /// discarded.
    #[must_use = "futures do nothing unless polled"]
    pub struct SeedFuture {
        rx: oneshot::Receiver<Result<Seed>>,
    }

    impl Future for SeedFuture {
        type Output = Result<Seed>;

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            Pin::new(&mut self.rx)
                .poll(cx)
                .map(|outcome| outcome.unwrap_or_else(|_| Err(Bip39Error::DerivationAborted)))
        }
    }

    /// Starts [`Seed::derive`] on a worker thread.
    pub fn derive_seed(mnemonic: &str, passphrase: &str) -> SeedFuture {
        let mnemonic = normalize(Some(mnemonic)).into_owned();
        let passphrase = normalize(Some(passphrase)).into_owned();
        let (tx, rx) = oneshot::channel();

        let spawned = thread::Builder::new()
            .name("bip39-seed".into())
            .spawn(move || {
                let outcome = Seed::derive(&mnemonic, &passphrase);
                wipe(mnemonic);
                wipe(passphrase);
                // The receiver may already be gone.
                let _ = tx.send(outcome);
            });

        match spawned {
            Ok(_) => log::debug!("seed derivation started"),
            Err(err) => log::error!("failed to spawn seed derivation worker: {}", err),
        }

        SeedFuture { rx }
    }

    /// [`derive_seed`], rendered as 128 lowercase hex characters.
    pub async fn derive_seed_hex(mnemonic: &str, passphrase: &str) -> Result<String> {
        derive_seed(mnemonic, passphrase)
            .await
            .map(|seed| seed.to_hex())
    }

    #[cfg(feature = "zeroize")]
    fn wipe(mut text: String) {
        zeroize::Zeroize::zeroize(&mut text);
    }

    #[cfg(not(feature = "zeroize"))]
    fn wipe(_text: String) {}
}
