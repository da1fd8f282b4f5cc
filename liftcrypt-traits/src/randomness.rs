use rand_core::{CryptoRng, RngCore};

/// Any RNG that is suitable for cryptographic use.
pub trait SecureRng: RngCore + CryptoRng {}

impl<R: RngCore + CryptoRng> SecureRng for R {}

/// General RNG that can be used for all dependencies.
pub struct GeneralRng<R: SecureRng> {
    rng: R,
}

impl<R: SecureRng> GeneralRng<R> {
    /// Creates a new `GeneralRng` based on an RNG that implements both `RngCore` and `CryptoRng`
    /// to ensure that the underlying RNG is indeed cryptographically secure.
    pub fn new(rng: R) -> Self {
        GeneralRng { rng }
    }

    /// Exposes the underlying RNG.
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }
}
