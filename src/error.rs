//! Error handling for field, curve, and protocol operations

use thiserror::Error;

/// The error type for curve arithmetic and the protocols built on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A modular inverse of zero was requested
    #[error("division by zero: 0 has no inverse mod {modulus}")]
    DivisionByZero {
        /// Modulus the inverse was requested under
        modulus: u64,
    },

    /// gcd(value, modulus) != 1, so no inverse exists
    #[error("{value} is not invertible mod {modulus}")]
    NotInvertible {
        /// Residue that has no inverse
        value: u64,
        /// Modulus the inverse was requested under
        modulus: u64,
    },

    /// The discriminant 4a^3 + 27b^2 vanishes mod p, so the group law
    /// is undefined
    #[error("singular curve: discriminant is zero for a = {a}, b = {b} over F_{p}")]
    SingularCurve {
        /// Curve coefficient a, reduced mod p
        a: u64,
        /// Curve coefficient b, reduced mod p
        b: u64,
        /// Field modulus
        p: u64,
    },

    /// Parameter validation error
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the rejected parameter
        name: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// An affine pair that does not satisfy the curve equation
    #[error("point ({x}, {y}) does not satisfy the curve equation")]
    PointNotOnCurve {
        /// x-coordinate of the rejected point
        x: u64,
        /// y-coordinate of the rejected point
        y: u64,
    },

    /// Signing never drew a usable nonce within the attempt bound
    #[error("signing exhausted after {attempts} nonce attempts")]
    SigningExhausted {
        /// How many nonces were tried before giving up
        attempts: u32,
    },

    /// A curve with no affine points, so no generator can be chosen
    #[error("curve has no affine points to choose a generator from")]
    EmptyGroup,
}

/// Result type for all fallible operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;
