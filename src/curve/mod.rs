//! Ad-hoc short Weierstrass curves y² = x³ + ax + b over 𝔽ₚ
//!
//! Curves here are parameterized directly by (a, b, p) rather than drawn
//! from a named standard; [`Curve::new`] is the only way to obtain one, so
//! singular parameter sets are rejected before any group operation can run.
//! The arithmetic is variable time and sized for demonstration fields.

mod point;


pub use point::Point;

use crate::error::{Error, Result};
use crate::field::{add_mod, mul_mod, reduce};
use rand::{CryptoRng, Rng, RngCore};

/// Short Weierstrass curve parameters over the prime field 𝔽ₚ.
///
/// Coefficients are stored reduced into `[0, p)`. The type is `Copy`; all
/// group operations are pure functions of the parameters and their point
/// arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Curve {
    a: u64,
    b: u64,
    p: u64,
}

impl Curve {
    /// Validate and construct a curve.
    ///
    /// Rejects `p ≤ 3` (no nonsingular short Weierstrass form exists) and
    /// any (a, b) whose discriminant `4a³ + 27b²` vanishes mod p. Primality
    /// of `p` is the caller's responsibility; see [`crate::field::is_prime`].
    pub fn new(a: i64, b: i64, p: u64) -> Result<Self> {
        if p <= 3 {
            return Err(Error::InvalidParameter {
                name: "p",
                reason: "field modulus must be greater than 3",
            });
        }
        let curve = Curve {
            a: reduce(a, p),
            b: reduce(b, p),
            p,
        };
        if curve.discriminant() == 0 {
            return Err(Error::SingularCurve {
                a: curve.a,
                b: curve.b,
                p,
            });
        }
        Ok(curve)
    }

    /// Draw uniform (a, b) from `[0, p)²` until the curve is nonsingular.
    ///
    /// Singular draws are retried internally and never surfaced; for any
    /// prime p > 3 almost all parameter pairs are nonsingular, so the loop
    /// terminates quickly.
    pub fn random<R: CryptoRng + RngCore>(p: u64, rng: &mut R) -> Result<Self> {
        if p <= 3 {
            return Err(Error::InvalidParameter {
                name: "p",
                reason: "field modulus must be greater than 3",
            });
        }
        loop {
            let candidate = Curve {
                a: rng.gen_range(0..p),
                b: rng.gen_range(0..p),
                p,
            };
            if candidate.discriminant() != 0 {
                return Ok(candidate);
            }
        }
    }

    /// Curve coefficient a, reduced mod p
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Curve coefficient b, reduced mod p
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Field modulus p
    pub fn p(&self) -> u64 {
        self.p
    }

    /// `4a³ + 27b² mod p`; zero means the group law is undefined
    pub fn discriminant(&self) -> u64 {
        let a3 = mul_mod(mul_mod(self.a, self.a, self.p), self.a, self.p);
        let b2 = mul_mod(self.b, self.b, self.p);
        add_mod(
            mul_mod(4 % self.p, a3, self.p),
            mul_mod(27 % self.p, b2, self.p),
            self.p,
        )
    }

    /// Right-hand side of the curve equation, `x³ + ax + b mod p`
    pub(crate) fn equation_rhs(&self, x: u64) -> u64 {
        let x2 = mul_mod(x, x, self.p);
        let x3 = mul_mod(x2, x, self.p);
        add_mod(add_mod(x3, mul_mod(self.a, x, self.p), self.p), self.b, self.p)
    }
}
