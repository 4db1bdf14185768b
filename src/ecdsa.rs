//! ECDSA signing and verification over ad-hoc small curves
//!
//! The shape is textbook ECDSA: z = H(m), a fresh nonce k per signature,
//! r = (k·G).x mod n, s = k⁻¹(z + r·d) mod n. Verification recomputes
//! u1·G + u2·Q and compares x-coordinates. The digest is injected through
//! [`MessageHash`], and the nonce source through the caller's rng.

use crate::curve::Point;
use crate::error::{Error, Result};
use crate::field::{add_mod, inv_mod, mul_mod};
use crate::group::Subgroup;
use crate::hash::MessageHash;
use crate::keys::{PublicKey, SecretScalar};
use rand::{CryptoRng, Rng, RngCore};

/// Nonce attempts before `sign` gives up with [`Error::SigningExhausted`].
///
/// On a tiny-order group a single draw is rejected with probability up to a
/// few percent, so an unbounded loop would be the usual choice; the bound
/// exists so pathological domains (order 2, say) terminate with a typed
/// error instead of spinning. 1024 attempts makes a spurious failure on any
/// reasonable teaching curve effectively impossible.
pub const MAX_SIGN_ATTEMPTS: u32 = 1024;

/// An ECDSA signature: the pair (r, s), both expected in [1, n−1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// x-coordinate of the nonce point, mod n
    pub r: u64,
    /// Proof scalar k⁻¹(z + r·d) mod n
    pub s: u64,
}

/// Sign a message with the private scalar d over the given domain.
///
/// Draws k uniformly from [1, n−1] and retries whenever the draw is
/// unusable: k·G is the identity, r = 0, k is not invertible mod n (a
/// composite order can make that happen), or s = 0. Those failures are
/// absorbed by the loop, never surfaced; only exhausting the attempt bound
/// produces an error.
pub fn sign<H, R>(
    message: &[u8],
    secret: &SecretScalar,
    domain: &Subgroup,
    hash: &H,
    rng: &mut R,
) -> Result<Signature>
where
    H: MessageHash,
    R: CryptoRng + RngCore,
{
    let curve = domain.curve();
    let n = domain.order();
    let z = hash.digest(message, curve.p()) % n;
    let d = secret.value() % n;

    for _ in 0..MAX_SIGN_ATTEMPTS {
        let k = rng.gen_range(1..n);

        let r = match curve.scalar_mult(k, domain.generator()) {
            Point::Identity => continue,
            Point::Affine { x, .. } => x % n,
        };
        if r == 0 {
            continue;
        }

        let k_inv = match inv_mod(k, n) {
            Ok(inv) => inv,
            Err(_) => continue,
        };
        let s = mul_mod(k_inv, add_mod(z, mul_mod(r, d, n), n), n);
        if s == 0 {
            continue;
        }

        return Ok(Signature { r, s });
    }
    Err(Error::SigningExhausted {
        attempts: MAX_SIGN_ATTEMPTS,
    })
}

/// Verify a signature against a public key over the given domain.
///
/// Always resolves to a boolean: out-of-range (r, s) and any internal
/// inverse failure mean "invalid", never an error. The range check runs
/// before anything else, so a zero component short-circuits without
/// touching the digest or a modular inverse.
pub fn verify<H: MessageHash>(
    message: &[u8],
    signature: &Signature,
    public: &PublicKey,
    domain: &Subgroup,
    hash: &H,
) -> bool {
    let n = domain.order();
    let Signature { r, s } = *signature;
    if r == 0 || r >= n || s == 0 || s >= n {
        return false;
    }

    let curve = domain.curve();
    let z = hash.digest(message, curve.p()) % n;
    let s_inv = match inv_mod(s, n) {
        Ok(inv) => inv,
        Err(_) => return false,
    };
    let u1 = mul_mod(z, s_inv, n);
    let u2 = mul_mod(r, s_inv, n);

    let point = curve.add(
        curve.scalar_mult(u1, domain.generator()),
        curve.scalar_mult(u2, public.point()),
    );
    match point {
        Point::Identity => false,
        Point::Affine { x, .. } => x % n == r,
    }
}
