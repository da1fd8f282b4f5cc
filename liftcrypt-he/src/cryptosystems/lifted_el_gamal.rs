use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoBasepointTable, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;
use liftcrypt_dlog::{encode, DecodeParams, MessageCodec};
use liftcrypt_traits::cryptosystems::{
    Associable, AsymmetricCryptosystem, DecryptionKey, EncryptionKey,
};
use liftcrypt_traits::homomorphic::HomomorphicAddition;
use liftcrypt_traits::randomness::GeneralRng;
use liftcrypt_traits::randomness::SecureRng;
use liftcrypt_traits::security::BitsOfSecurity;
use liftcrypt_traits::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::iter::Sum;
use std::sync::Arc;
use tracing::debug;
use zeroize::Zeroize;

/// Ristretto255 has a group order of about $2^{252}$, which is conventionally rated at 128 bits.
const RISTRETTO_SECURITY_BITS: u64 = 128;

/// Lifted (or 'exponential') ElGamal over the Ristretto-encoded Curve25519 elliptic curve. The
/// curve is provided by the `curve25519-dalek` crate.
///
/// A plaintext $m$ is encrypted as $(rG, mG + rY)$ for the public key $Y$ and a fresh random
/// $r$. Adding ciphertexts adds the plaintexts. Decryption recovers $mG$ and solves a discrete
/// logarithm, so plaintexts must stay below the configured bound.
#[derive(Clone)]
pub struct LiftedElGamal {
    codec: Arc<MessageCodec>,
}

/// Lifted ElGamal ciphertext containing curve points. Combining two ciphertexts is reflected as
/// the addition of the associated plaintexts.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct LiftedElGamalCiphertext {
    /// First part of ciphertext, $rG$
    pub c1: RistrettoPoint,
    /// Second part of ciphertext, $mG + rY$
    pub c2: RistrettoPoint,
}

impl Associable<LiftedElGamalPK> for LiftedElGamalCiphertext {}
impl Associable<PrecomputedLiftedElGamalPK> for LiftedElGamalCiphertext {}

/// Encryption key for lifted ElGamal
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LiftedElGamalPK {
    /// Public key as a RistrettoPoint
    pub point: RistrettoPoint,
    /// Plaintexts must lie in `[0, bound)`. Must equal the bound of the secret key's codec,
    /// otherwise decryption refuses the key.
    pub bound: u64,
}

/// Decryption key for lifted ElGamal. The key scalar is wiped from memory when dropped.
pub struct LiftedElGamalSK {
    key: Scalar,
    codec: Arc<MessageCodec>,
}

/// A freshly generated public key and its secret key.
pub struct KeyPair {
    /// Key used for encryption, shareable with anyone
    pub public_key: PrecomputedLiftedElGamalPK,
    /// Key used for decryption, held only by the decrypting party
    pub secret_key: LiftedElGamalSK,
}

impl LiftedElGamal {
    /// Exclusive upper bound on plaintexts.
    pub fn bound(&self) -> u64 {
        self.codec.bound()
    }

    /// Generates a key pair whose secret key shares this instance's decoding tables.
    pub fn generate_key_pair<R: SecureRng>(&self, rng: &mut GeneralRng<R>) -> KeyPair {
        let (public_key, secret_key) = self.generate_keys(rng);

        KeyPair {
            public_key,
            secret_key,
        }
    }
}

impl LiftedElGamalCiphertext {
    /// Combines two ciphertexts under the same key into an encryption of the sum of their
    /// plaintexts.
    pub fn combine(&self, other: &LiftedElGamalCiphertext) -> LiftedElGamalCiphertext {
        LiftedElGamalCiphertext {
            c1: self.c1 + other.c1,
            c2: self.c2 + other.c2,
        }
    }

    /// Multiplies the encrypted plaintext by `factor`.
    pub fn scale(&self, factor: u64) -> LiftedElGamalCiphertext {
        let factor = Scalar::from(factor);

        LiftedElGamalCiphertext {
            c1: self.c1 * factor,
            c2: self.c2 * factor,
        }
    }

    /// Encodes both points in their 32-byte compressed form.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(self.c1.compress().as_bytes());
        bytes[32..].copy_from_slice(self.c2.compress().as_bytes());
        bytes
    }

    /// Decodes a ciphertext from two compressed points, rejecting invalid encodings.
    pub fn from_bytes(bytes: &[u8; 64]) -> Result<LiftedElGamalCiphertext> {
        Ok(LiftedElGamalCiphertext {
            c1: decompress(&bytes[..32])?,
            c2: decompress(&bytes[32..])?,
        })
    }
}

fn decompress(bytes: &[u8]) -> Result<RistrettoPoint> {
    let mut compressed = [0u8; 32];
    compressed.copy_from_slice(bytes);

    CompressedRistretto(compressed)
        .decompress()
        .ok_or(Error::MalformedPoint)
}

impl<'a> Sum<&'a LiftedElGamalCiphertext> for LiftedElGamalCiphertext {
    /// The empty sum is the identity ciphertext, which decrypts to 0.
    fn sum<I: Iterator<Item = &'a LiftedElGamalCiphertext>>(iter: I) -> Self {
        iter.fold(
            LiftedElGamalCiphertext {
                c1: RistrettoPoint::identity(),
                c2: RistrettoPoint::identity(),
            },
            |acc, ciphertext| acc.combine(ciphertext),
        )
    }
}

impl LiftedElGamalPK {
    /// Precompute values for the encryption key to speed-up future encryptions
    pub fn precompute(self) -> PrecomputedLiftedElGamalPK {
        PrecomputedLiftedElGamalPK {
            point: RistrettoBasepointTable::create(&self.point),
            bound: self.bound,
        }
    }

    fn encrypt_unchecked<R: SecureRng>(
        &self,
        plaintext: u64,
        rng: &mut GeneralRng<R>,
    ) -> LiftedElGamalCiphertext {
        let r = random_nonzero_scalar(rng);

        LiftedElGamalCiphertext {
            c1: RistrettoPoint::mul_base(&r),
            c2: encode(plaintext) + r * self.point,
        }
    }
}

impl LiftedElGamalSK {
    fn check_bound(&self, public_key_bound: u64) -> Result<()> {
        if public_key_bound != self.codec.bound() {
            return Err(Error::InvalidParameters(format!(
                "the public key allows plaintexts below {}, but this secret key decodes below {}",
                public_key_bound,
                self.codec.bound()
            )));
        }

        Ok(())
    }

    fn decrypt_directly(&self, ciphertext: &LiftedElGamalCiphertext) -> Result<u64> {
        let lifted = ciphertext.c2 - self.key * ciphertext.c1;

        self.codec.decode(&lifted).map_err(|error| {
            debug!(bound = error.bound, "ciphertext does not decode to a plaintext");
            Error::from(error)
        })
    }
}

impl Drop for LiftedElGamalSK {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

fn check_plaintext(plaintext: u64, bound: u64) -> Result<()> {
    if plaintext >= bound {
        return Err(Error::InvalidPlaintext {
            value: plaintext,
            bound,
        });
    }

    Ok(())
}

/// Draws a scalar uniformly from $[1, n - 1]$.
fn random_nonzero_scalar<R: SecureRng>(rng: &mut GeneralRng<R>) -> Scalar {
    loop {
        let scalar = Scalar::random(rng.rng());
        if scalar != Scalar::ZERO {
            return scalar;
        }
    }
}

impl AsymmetricCryptosystem for LiftedElGamal {
    type PublicKey = PrecomputedLiftedElGamalPK;
    type SecretKey = LiftedElGamalSK;
    type Parameters = DecodeParams;

    fn setup(security_param: &BitsOfSecurity, parameters: &DecodeParams) -> Result<Self> {
        if security_param.to_symmetric_bits() > RISTRETTO_SECURITY_BITS {
            return Err(Error::UnsupportedSecurity(format!(
                "the Ristretto group offers {} bits of security, {} were requested",
                RISTRETTO_SECURITY_BITS,
                security_param.to_symmetric_bits()
            )));
        }

        Ok(LiftedElGamal {
            codec: Arc::new(MessageCodec::new(parameters)?),
        })
    }

    fn generate_keys<R: SecureRng>(
        &self,
        rng: &mut GeneralRng<R>,
    ) -> (PrecomputedLiftedElGamalPK, LiftedElGamalSK) {
        let secret_key = random_nonzero_scalar(rng);
        let public_key = RistrettoPoint::mul_base(&secret_key);
        debug!(bound = self.bound(), "generated lifted ElGamal key pair");

        (
            LiftedElGamalPK {
                point: public_key,
                bound: self.bound(),
            }
            .precompute(),
            LiftedElGamalSK {
                key: secret_key,
                codec: Arc::clone(&self.codec),
            },
        )
    }
}

impl EncryptionKey for LiftedElGamalPK {
    type Input = u64;
    type Plaintext = u64;
    type Ciphertext = LiftedElGamalCiphertext;

    fn encrypt_raw<R: SecureRng>(
        &self,
        plaintext: &u64,
        rng: &mut GeneralRng<R>,
    ) -> Result<LiftedElGamalCiphertext> {
        check_plaintext(*plaintext, self.bound)?;

        Ok(self.encrypt_unchecked(*plaintext, rng))
    }
}

/// Public key with several precomputations to speed-up encryption
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "LiftedElGamalPK", into = "LiftedElGamalPK")]
pub struct PrecomputedLiftedElGamalPK {
    point: RistrettoBasepointTable,
    bound: u64,
}

impl PrecomputedLiftedElGamalPK {
    /// The public key without its precomputed table.
    pub fn public_key(&self) -> LiftedElGamalPK {
        LiftedElGamalPK {
            point: self.point.basepoint(),
            bound: self.bound,
        }
    }

    /// Plaintexts must lie in `[0, bound)`.
    pub fn bound(&self) -> u64 {
        self.bound
    }

    fn encrypt_unchecked<R: SecureRng>(
        &self,
        plaintext: u64,
        rng: &mut GeneralRng<R>,
    ) -> LiftedElGamalCiphertext {
        let r = random_nonzero_scalar(rng);

        LiftedElGamalCiphertext {
            c1: RistrettoPoint::mul_base(&r),
            c2: encode(plaintext) + &r * &self.point,
        }
    }
}

impl From<LiftedElGamalPK> for PrecomputedLiftedElGamalPK {
    fn from(public_key: LiftedElGamalPK) -> Self {
        public_key.precompute()
    }
}

impl From<PrecomputedLiftedElGamalPK> for LiftedElGamalPK {
    fn from(public_key: PrecomputedLiftedElGamalPK) -> Self {
        public_key.public_key()
    }
}

impl Debug for PrecomputedLiftedElGamalPK {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.public_key())
    }
}

impl PartialEq for PrecomputedLiftedElGamalPK {
    fn eq(&self, other: &Self) -> bool {
        self.point.basepoint() == other.point.basepoint() && self.bound == other.bound
    }
}

impl EncryptionKey for PrecomputedLiftedElGamalPK {
    type Input = u64;
    type Plaintext = u64;
    type Ciphertext = LiftedElGamalCiphertext;

    fn encrypt_raw<R: SecureRng>(
        &self,
        plaintext: &u64,
        rng: &mut GeneralRng<R>,
    ) -> Result<LiftedElGamalCiphertext> {
        check_plaintext(*plaintext, self.bound)?;

        Ok(self.encrypt_unchecked(*plaintext, rng))
    }
}

impl DecryptionKey<LiftedElGamalPK> for LiftedElGamalSK {
    fn decrypt_raw(
        &self,
        public_key: &LiftedElGamalPK,
        ciphertext: &LiftedElGamalCiphertext,
    ) -> Result<u64> {
        self.check_bound(public_key.bound)?;
        self.decrypt_directly(ciphertext)
    }
}

impl DecryptionKey<PrecomputedLiftedElGamalPK> for LiftedElGamalSK {
    fn decrypt_raw(
        &self,
        public_key: &PrecomputedLiftedElGamalPK,
        ciphertext: &LiftedElGamalCiphertext,
    ) -> Result<u64> {
        self.check_bound(public_key.bound)?;
        self.decrypt_directly(ciphertext)
    }
}

impl HomomorphicAddition for LiftedElGamalPK {
    fn add(
        &self,
        ciphertext_a: Self::Ciphertext,
        ciphertext_b: Self::Ciphertext,
    ) -> Self::Ciphertext {
        ciphertext_a.combine(&ciphertext_b)
    }

    fn mul(&self, ciphertext: Self::Ciphertext, input: Self::Input) -> Self::Ciphertext {
        ciphertext.scale(input)
    }

    fn rerandomize<R: SecureRng>(
        &self,
        ciphertext: Self::Ciphertext,
        rng: &mut GeneralRng<R>,
    ) -> Self::Ciphertext {
        ciphertext.combine(&self.encrypt_unchecked(0, rng))
    }
}

impl HomomorphicAddition for PrecomputedLiftedElGamalPK {
    fn add(
        &self,
        ciphertext_a: Self::Ciphertext,
        ciphertext_b: Self::Ciphertext,
    ) -> Self::Ciphertext {
        ciphertext_a.combine(&ciphertext_b)
    }

    fn mul(&self, ciphertext: Self::Ciphertext, input: Self::Input) -> Self::Ciphertext {
        ciphertext.scale(input)
    }

    fn rerandomize<R: SecureRng>(
        &self,
        ciphertext: Self::Ciphertext,
        rng: &mut GeneralRng<R>,
    ) -> Self::Ciphertext {
        ciphertext.combine(&self.encrypt_unchecked(0, rng))
    }
}

#[cfg(test)]
mod tests {
    use crate::cryptosystems::lifted_el_gamal::{
        KeyPair, LiftedElGamal, LiftedElGamalCiphertext, LiftedElGamalPK,
        PrecomputedLiftedElGamalPK,
    };
    use bincode::{deserialize, serialize};
    use curve25519_dalek::ristretto::RistrettoPoint;
    use liftcrypt_dlog::{DecodeParams, SearchStrategy};
    use liftcrypt_traits::cryptosystems::{AsymmetricCryptosystem, DecryptionKey, EncryptionKey};
    use liftcrypt_traits::randomness::GeneralRng;
    use liftcrypt_traits::security::BitsOfSecurity;
    use liftcrypt_traits::Error;
    use rand_core::OsRng;

    fn setup(bound: u64) -> LiftedElGamal {
        LiftedElGamal::setup(&Default::default(), &DecodeParams::with_bound(bound)).unwrap()
    }

    #[test]
    fn test_encrypt_decrypt() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);

        for m in [0, 1, 42, 999] {
            let ciphertext = pk.encrypt(&m, &mut rng).unwrap();
            assert_eq!(m, sk.decrypt(&ciphertext).unwrap());
        }
    }

    #[test]
    fn test_encrypt_decrypt_without_precomputation() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);
        let pk = pk.public_key();

        let ciphertext = pk.encrypt(&123, &mut rng).unwrap();

        assert_eq!(123, sk.decrypt(&ciphertext).unwrap());
    }

    #[test]
    fn test_linear_scan_strategy() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = LiftedElGamal::setup(
            &BitsOfSecurity::AES128,
            &DecodeParams {
                bound: 100,
                strategy: SearchStrategy::Linear,
            },
        )
        .unwrap();
        let (pk, sk) = el_gamal.generate_keys(&mut rng);

        let ciphertext = pk.encrypt(&99, &mut rng).unwrap();

        assert_eq!(99, sk.decrypt(&ciphertext).unwrap());
    }

    #[test]
    fn test_key_pair_relation() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let KeyPair {
            public_key,
            secret_key,
        } = el_gamal.generate_key_pair(&mut rng);

        assert_eq!(
            public_key.public_key().point,
            RistrettoPoint::mul_base(&secret_key.key)
        );
        assert_eq!(public_key.bound(), 1000);
    }

    #[test]
    fn test_rejects_plaintext_outside_message_space() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, _) = el_gamal.generate_keys(&mut rng);

        assert_eq!(
            pk.encrypt_raw(&1000, &mut rng),
            Err(Error::InvalidPlaintext {
                value: 1000,
                bound: 1000
            })
        );
    }

    #[test]
    fn test_probabilistic_encryption() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, _) = el_gamal.generate_keys(&mut rng);

        let ciphertext1 = pk.encrypt_raw(&5, &mut rng).unwrap();
        let ciphertext2 = pk.encrypt_raw(&5, &mut rng).unwrap();

        assert_ne!(ciphertext1, ciphertext2);
        assert_ne!(ciphertext1.c1, ciphertext2.c1);
    }

    #[test]
    fn test_homomorphic_add() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);

        let ciphertext_a = pk.encrypt(&7, &mut rng).unwrap();
        let ciphertext_b = pk.encrypt(&35, &mut rng).unwrap();
        let ciphertext_sum = ciphertext_a + ciphertext_b;

        assert_eq!(42, sk.decrypt(&ciphertext_sum).unwrap());
    }

    #[test]
    fn test_combination_is_associative_and_commutative() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);

        let a = pk.encrypt_raw(&100, &mut rng).unwrap();
        let b = pk.encrypt_raw(&200, &mut rng).unwrap();
        let c = pk.encrypt_raw(&300, &mut rng).unwrap();

        let left = a.combine(&b).combine(&c);
        let right = a.combine(&b.combine(&c));
        let swapped = b.combine(&a).combine(&c);

        // The group law makes these equal as ciphertexts, not only as plaintexts.
        assert_eq!(left, right);
        assert_eq!(left, swapped);
        assert_eq!(600, sk.decrypt_raw(&pk, &left).unwrap());
    }

    #[test]
    fn test_overflow_fails_to_decrypt() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);

        let ciphertext_a = pk.encrypt(&999, &mut rng).unwrap();
        let ciphertext_b = pk.encrypt(&2, &mut rng).unwrap();

        assert_eq!(
            sk.decrypt(&(ciphertext_a + ciphertext_b)),
            Err(Error::DecryptionFailed { bound: 1000 })
        );
    }

    #[test]
    fn test_wrong_key_fails_to_decrypt() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);
        let (_, other_sk) = el_gamal.generate_keys(&mut rng);

        let ciphertext = pk.encrypt(&42, &mut rng).unwrap();

        assert_eq!(
            other_sk.decrypt(&ciphertext),
            Err(Error::DecryptionFailed { bound: 1000 })
        );
        // A failed decryption leaves the keys usable.
        assert_eq!(42, sk.decrypt(&ciphertext).unwrap());
    }

    #[test]
    fn test_rejects_public_key_with_other_bound() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(100);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);
        let widened = LiftedElGamalPK {
            bound: 1_000_000,
            ..pk.public_key()
        };

        let ciphertext = widened.encrypt(&500, &mut rng).unwrap();

        assert!(matches!(
            sk.decrypt(&ciphertext),
            Err(Error::InvalidParameters(_))
        ));
        assert!(matches!(
            sk.decrypt_raw(&widened.precompute(), &ciphertext.ciphertext),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_homomorphic_scalar_mul() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);

        let ciphertext = pk.encrypt(&7, &mut rng).unwrap();
        let ciphertext_six_times = ciphertext * 6u64;

        assert_eq!(42, sk.decrypt(&ciphertext_six_times).unwrap());
    }

    #[test]
    fn test_rerandomize() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);

        let ciphertext = pk.encrypt(&42, &mut rng).unwrap();
        let rerandomized = ciphertext.clone().rerandomize(&mut rng);

        assert_ne!(ciphertext.ciphertext, rerandomized.ciphertext);
        assert_eq!(42, sk.decrypt(&rerandomized).unwrap());
    }

    #[test]
    fn test_tally() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);

        let votes = [1, 0, 1, 1, 0, 1, 1];
        let ciphertexts: Vec<LiftedElGamalCiphertext> = votes
            .iter()
            .map(|vote| pk.encrypt_raw(vote, &mut rng).unwrap())
            .collect();
        let tally: LiftedElGamalCiphertext = ciphertexts.iter().sum();

        assert_eq!(5, sk.decrypt_raw(&pk, &tally).unwrap());

        let no_ciphertexts: [LiftedElGamalCiphertext; 0] = [];
        let empty: LiftedElGamalCiphertext = no_ciphertexts.iter().sum();
        assert_eq!(0, sk.decrypt_raw(&pk, &empty).unwrap());
    }

    #[test]
    fn test_concurrent_decryption() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);

        let ciphertexts: Vec<(u64, LiftedElGamalCiphertext)> = (0..8)
            .map(|i| (i * 100, pk.encrypt_raw(&(i * 100), &mut rng).unwrap()))
            .collect();

        std::thread::scope(|scope| {
            for (m, ciphertext) in &ciphertexts {
                let (pk, sk) = (&pk, &sk);
                scope.spawn(move || {
                    assert_eq!(*m, sk.decrypt_raw(pk, ciphertext).unwrap());
                });
            }
        });
    }

    #[test]
    fn test_ciphertext_bytes() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);

        let ciphertext = pk.encrypt_raw(&77, &mut rng).unwrap();
        let decoded = LiftedElGamalCiphertext::from_bytes(&ciphertext.to_bytes()).unwrap();

        assert_eq!(ciphertext, decoded);
        assert_eq!(77, sk.decrypt_raw(&pk, &decoded).unwrap());
        assert_eq!(
            LiftedElGamalCiphertext::from_bytes(&[0xff; 64]),
            Err(Error::MalformedPoint)
        );
    }

    #[test]
    fn test_unsupported_security() {
        assert!(matches!(
            LiftedElGamal::setup(&BitsOfSecurity::AES256, &DecodeParams::default()),
            Err(Error::UnsupportedSecurity(_))
        ));
    }

    #[test]
    fn serialize_deserialize() {
        let mut rng = GeneralRng::new(OsRng);

        let el_gamal = setup(1000);
        let (pk, sk) = el_gamal.generate_keys(&mut rng);

        let pk_deserialized: PrecomputedLiftedElGamalPK =
            deserialize(&serialize(&pk).unwrap()).unwrap();
        let plain_pk: LiftedElGamalPK = deserialize(&serialize(&pk).unwrap()).unwrap();
        let (pk_new, _sk) = el_gamal.generate_keys(&mut rng);

        assert_eq!(pk_deserialized, pk);
        assert_eq!(plain_pk, pk.public_key());
        assert_ne!(pk_new, pk_deserialized);

        let ciphertext = pk_deserialized.encrypt_raw(&9, &mut rng).unwrap();
        let ciphertext: LiftedElGamalCiphertext =
            deserialize(&serialize(&ciphertext).unwrap()).unwrap();
        assert_eq!(9, sk.decrypt_raw(&pk, &ciphertext).unwrap());
    }
}
