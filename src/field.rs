//! Modular arithmetic over a prime field
//!
//! All field elements are plain `u64` residues in `[0, p)`; intermediate
//! products are widened to `u128`, so any 64-bit modulus is handled without
//! overflow. Nothing here is constant time.

use crate::error::{Error, Result};

/// `(a + b) mod m`
#[inline]
pub(crate) fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

/// `(a - b) mod m`, wrapping into `[0, m)`
#[inline]
pub(crate) fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    let (a, b) = (a % m, b % m);
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// `(a * b) mod m` via a widened intermediate
#[inline]
pub(crate) fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Reduce a signed integer into `[0, m)`
#[inline]
pub(crate) fn reduce(v: i64, m: u64) -> u64 {
    (v as i128).rem_euclid(m as i128) as u64
}

/// Multiplicative inverse `k⁻¹ mod m` via the extended Euclidean algorithm.
///
/// Negative `k` is folded through the identity `k⁻¹ = m − (−k)⁻¹`. The
/// result is normalized to `[0, m)`.
///
/// Fails with [`Error::DivisionByZero`] when `k ≡ 0 (mod m)` and with
/// [`Error::NotInvertible`] when `gcd(k, m) ≠ 1` (a non-prime modulus can
/// make nonzero residues non-invertible; that is reported, never papered
/// over with a bogus value).
pub fn inverse_mod(k: i64, m: u64) -> Result<u64> {
    if m == 0 {
        return Err(Error::InvalidParameter {
            name: "modulus",
            reason: "must be positive",
        });
    }
    if reduce(k, m) == 0 {
        return Err(Error::DivisionByZero { modulus: m });
    }
    if k < 0 {
        // k⁻¹ ≡ −((−k)⁻¹) ≡ m − (−k)⁻¹; negate through i128 so i64::MIN
        // stays in range
        let abs = (-(k as i128)).rem_euclid(m as i128) as u64;
        let inv = inv_mod(abs, m)?;
        return Ok(m - inv);
    }
    inv_mod(k as u64, m)
}

/// Unsigned core of [`inverse_mod`]; also used directly by the group law
/// and the signature protocol, where operands are already residues.
pub(crate) fn inv_mod(k: u64, m: u64) -> Result<u64> {
    let k = k % m;
    if k == 0 {
        return Err(Error::DivisionByZero { modulus: m });
    }

    // Extended Euclid: track old_s so that old_r = gcd = old_s·k + t·m.
    let (mut old_r, mut r) = (k as i128, m as i128);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }

    if old_r != 1 {
        return Err(Error::NotInvertible {
            value: k,
            modulus: m,
        });
    }
    Ok(old_s.rem_euclid(m as i128) as u64)
}

/// Trial-division primality check.
///
/// Intended for validating demonstration-sized field moduli before handing
/// them to the curve layer; the group operations themselves assume a prime
/// modulus and do not re-check it per call.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
