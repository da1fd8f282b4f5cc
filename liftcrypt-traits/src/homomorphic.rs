use std::ops::{Add, Mul};

use crate::cryptosystems::{Associable, AssociatedCiphertext, EncryptionKey};
use crate::randomness::{GeneralRng, SecureRng};

/// Cryptosystems whose ciphertexts can be combined into an encryption of the sum of their
/// plaintexts.
pub trait HomomorphicAddition: EncryptionKey {
    /// Combines two ciphertexts into one that decrypts to the sum of both plaintexts.
    fn add(&self, ciphertext_a: Self::Ciphertext, ciphertext_b: Self::Ciphertext)
        -> Self::Ciphertext;

    /// Multiplies the encrypted plaintext with `input`.
    fn mul(&self, ciphertext: Self::Ciphertext, input: Self::Input) -> Self::Ciphertext;

    /// Produces a fresh ciphertext of the same plaintext that cannot be linked to the original.
    fn rerandomize<R: SecureRng>(
        &self,
        ciphertext: Self::Ciphertext,
        rng: &mut GeneralRng<R>,
    ) -> Self::Ciphertext;
}

impl<'pk, C: Associable<PK>, PK: EncryptionKey<Ciphertext = C> + HomomorphicAddition> Add
    for AssociatedCiphertext<'pk, C, PK>
{
    type Output = AssociatedCiphertext<'pk, C, PK>;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.public_key, rhs.public_key);
        HomomorphicAddition::add(self.public_key, self.ciphertext, rhs.ciphertext)
            .associate(self.public_key)
    }
}

impl<'pk, P, C, PK> Mul<P> for AssociatedCiphertext<'pk, C, PK>
where
    C: Associable<PK>,
    PK: EncryptionKey<Input = P, Ciphertext = C> + HomomorphicAddition,
{
    type Output = AssociatedCiphertext<'pk, C, PK>;

    fn mul(self, rhs: P) -> Self::Output {
        HomomorphicAddition::mul(self.public_key, self.ciphertext, rhs).associate(self.public_key)
    }
}

impl<'pk, C: Associable<PK>, PK: EncryptionKey<Ciphertext = C> + HomomorphicAddition>
    AssociatedCiphertext<'pk, C, PK>
{
    /// Re-randomizes the ciphertext under its associated public key.
    pub fn rerandomize<R: SecureRng>(self, rng: &mut GeneralRng<R>) -> Self {
        self.public_key
            .rerandomize(self.ciphertext, rng)
            .associate(self.public_key)
    }
}
