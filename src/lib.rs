//! Elliptic-curve arithmetic over small prime fields, with ECDSA and ECDH
//! on top, for teaching public-key cryptography.
//!
//! Curves are ad hoc short Weierstrass parameter sets (a, b, p) rather than
//! named standards, the whole group can be enumerated by brute force, and
//! every operation is variable time. None of this is suitable for
//! protecting real data, and that is the point: the group law, the
//! signature protocol, and the key exchange are all small enough to trace
//! by hand.
//!
//! # Example
//!
//! ```
//! use rand::rngs::OsRng;
//! use smallcurve::{generate_keypair, sign, verify, ByteSum, Curve, Subgroup};
//!
//! # fn main() -> smallcurve::Result<()> {
//! // y² = x³ + 2x + 2 over F₁₇: 19 points, identity included
//! let curve = Curve::new(2, 2, 17)?;
//! let domain = Subgroup::from_enumeration(curve)?;
//!
//! let mut rng = OsRng;
//! let (secret, public) = generate_keypair(&domain, &mut rng);
//! let signature = sign(b"hello", &secret, &domain, &ByteSum, &mut rng)?;
//! assert!(verify(b"hello", &signature, &public, &domain, &ByteSum));
//! # Ok(())
//! # }
//! ```
//!
//! Randomness is injected everywhere it is consumed (`CryptoRng + RngCore`
//! bounds), so tests can run on seeded generators and callers who reuse
//! these types beyond the classroom can supply an OS-backed one. The
//! message digest is likewise pluggable through [`MessageHash`];
//! [`ByteSum`] is the toy default.

pub mod curve;
pub mod ecdh;
pub mod ecdsa;
pub mod error;
pub mod field;
pub mod group;
pub mod hash;
pub mod keys;

pub use curve::{Curve, Point};
pub use ecdh::shared_secret;
pub use ecdsa::{sign, verify, Signature, MAX_SIGN_ATTEMPTS};
pub use error::{Error, Result};
pub use field::{inverse_mod, is_prime};
pub use group::{enumerate_points, Subgroup};
pub use hash::{ByteSum, MessageHash};
pub use keys::{generate_keypair, PublicKey, SecretScalar};
