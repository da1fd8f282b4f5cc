#![doc = include_str!("../README.md")]
#![warn(missing_docs, unused_imports)]

pub use liftcrypt_dlog;
pub use liftcrypt_he::cryptosystems;
pub use liftcrypt_traits;
