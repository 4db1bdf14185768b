//! Key material: private scalars and public points

use crate::curve::Point;
use crate::group::Subgroup;
use core::fmt;
use rand::{CryptoRng, Rng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A private scalar d ∈ [1, n−1]. Zeroized on drop.
///
/// On a demonstration curve the value is brute-forceable anyway;
/// zeroization matters only for callers who plug in larger parameters.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretScalar(u64);

impl SecretScalar {
    /// Wrap an existing scalar, e.g. a fixed test key. Callers are
    /// responsible for keeping it in `[1, n−1]` for their domain.
    pub fn new(d: u64) -> Self {
        SecretScalar(d)
    }

    /// The raw scalar value
    pub fn value(&self) -> u64 {
        self.0
    }
}

// Debug without the value, so key material never lands in logs
impl fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretScalar(..)")
    }
}

/// The public half of a key pair, Q = d·G. Freely shareable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Wrap a public point received from a peer
    pub fn new(point: Point) -> Self {
        PublicKey(point)
    }

    /// The underlying curve point
    pub fn point(&self) -> Point {
        self.0
    }
}

/// Generate a key pair over the given domain parameters.
///
/// Draws d uniformly from [1, n−1] and computes Q = d·G. Every in-range
/// scalar is a valid key, so no retry loop is needed.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    domain: &Subgroup,
    rng: &mut R,
) -> (SecretScalar, PublicKey) {
    let d = rng.gen_range(1..domain.order());
    let q = domain.curve().scalar_mult(d, domain.generator());
    (SecretScalar(d), PublicKey(q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Curve;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn demo_domain() -> Subgroup {
        let curve = Curve::new(2, 2, 17).unwrap();
        Subgroup::new(curve, Point::Affine { x: 5, y: 1 }, 19).unwrap()
    }

    #[test]
    fn keypair_scalar_in_range_and_public_on_curve() {
        let domain = demo_domain();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for _ in 0..32 {
            let (secret, public) = generate_keypair(&domain, &mut rng);
            assert!((1..domain.order()).contains(&secret.value()));
            assert!(domain.curve().contains(public.point()));
            assert_eq!(
                public.point(),
                domain
                    .curve()
                    .scalar_mult(secret.value(), domain.generator())
            );
        }
    }

    #[test]
    fn secret_debug_does_not_leak() {
        let secret = SecretScalar::new(12345);
        assert_eq!(format!("{:?}", secret), "SecretScalar(..)");
    }
}
