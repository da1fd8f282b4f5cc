/// The number of bits of security as compared to the AES cryptosystem. Check
/// <https://www.keylength.com/en/4/> for recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsOfSecurity {
    /// Security that is equivalent to the security of the 2TDEA cryptosystem. This choice of
    /// parameters is not secure and is only used for legacy.
    AES80,
    /// This level of security is expected to be safe until 2030.
    AES112,
    /// Security that is equivalent to that of 128 bits in the AES cryptosystem. This level of
    /// security is expected to be safe until 2030 & beyond.
    AES128,
    /// Security that is equivalent to that of 192 bits in the AES cryptosystem.
    AES192,
    /// Security that is equivalent to that of 256 bits in the AES cryptosystem.
    AES256,
    /// Security expressed through the bit length of a prime-order group. Generic discrete
    /// logarithm attacks take square-root time, so this gives half as many bits of security.
    Other {
        /// The number of bits in the group order.
        group_bits: u64,
    },
}

impl BitsOfSecurity {
    /// Returns the symmetric security level in bits.
    pub fn to_symmetric_bits(&self) -> u64 {
        match self {
            Self::AES80 => 80,
            Self::AES112 => 112,
            Self::AES128 => 128,
            Self::AES192 => 192,
            Self::AES256 => 256,
            Self::Other { group_bits } => group_bits / 2,
        }
    }
}

impl Default for BitsOfSecurity {
    fn default() -> Self {
        Self::AES128
    }
}
