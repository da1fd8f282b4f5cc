/// Implementation of the lifted ElGamal cryptosystem over an elliptic curve.
pub mod lifted_el_gamal;
