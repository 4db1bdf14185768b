//! The group law on curve points

use super::Curve;
use crate::field::{add_mod, inv_mod, mul_mod, sub_mod};

/// A point on a curve: the group identity (point at infinity) or an affine
/// coordinate pair with both coordinates reduced mod p.
///
/// Points are plain values with no identity beyond equality; they carry no
/// reference to the curve they came from, so mixing points across curves is
/// the caller's bug to avoid, as with any ad-hoc parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity
    Identity,
    /// An affine point (x, y)
    Affine {
        /// x-coordinate in `[0, p)`
        x: u64,
        /// y-coordinate in `[0, p)`
        y: u64,
    },
}

impl Point {
    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// x-coordinate, or `None` for the identity
    pub fn x(&self) -> Option<u64> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(*x),
        }
    }

    /// y-coordinate, or `None` for the identity
    pub fn y(&self) -> Option<u64> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(*y),
        }
    }
}

impl Curve {
    /// Group-law addition of two points.
    ///
    /// The identity is a two-sided neutral element; a point plus its
    /// reflection (same x, different y) is the identity; doubling a point
    /// with y = 0 (an order-2 point, vertical tangent) is the identity.
    /// Otherwise the chord/tangent construction applies. A degenerate slope
    /// denominator maps to the identity rather than an error, since valid
    /// curve points only hit it in the vertical-line cases above.
    pub fn add(&self, p1: Point, p2: Point) -> Point {
        let (x1, y1) = match p1 {
            Point::Identity => return p2,
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match p2 {
            Point::Identity => return p1,
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 && y1 != y2 {
            // P + (−P)
            return Point::Identity;
        }

        let p = self.p;
        let (num, den) = if (x1, y1) == (x2, y2) {
            // Tangent slope (3x² + a) / 2y; y = 0 makes the tangent vertical
            let num = add_mod(mul_mod(3 % p, mul_mod(x1, x1, p), p), self.a, p);
            (num, mul_mod(2 % p, y1, p))
        } else {
            // Chord slope (y2 − y1) / (x2 − x1)
            (sub_mod(y2, y1, p), sub_mod(x2, x1, p))
        };
        let slope = match inv_mod(den, p) {
            Ok(inv) => mul_mod(num, inv, p),
            Err(_) => return Point::Identity,
        };

        let x3 = sub_mod(sub_mod(mul_mod(slope, slope, p), x1, p), x2, p);
        let y3 = sub_mod(mul_mod(slope, sub_mod(x1, x3, p), p), y1, p);
        Point::Affine { x: x3, y: y3 }
    }

    /// `2P`, a shorthand for `add(p, p)`
    pub fn double(&self, point: Point) -> Point {
        self.add(point, point)
    }

    /// `k·P` via least-significant-bit-first double-and-add.
    ///
    /// `k = 0` yields the identity. The scalar is unsigned by type; callers
    /// working mod a group order reduce before calling.
    pub fn scalar_mult(&self, k: u64, point: Point) -> Point {
        let mut result = Point::Identity;
        let mut addend = point;
        let mut k = k;
        while k != 0 {
            if k & 1 == 1 {
                result = self.add(result, addend);
            }
            addend = self.add(addend, addend);
            k >>= 1;
        }
        result
    }

    /// Does the point satisfy y² ≡ x³ + ax + b (mod p)?
    ///
    /// The identity is trivially on every curve.
    pub fn contains(&self, point: Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => mul_mod(y, y, self.p) == self.equation_rhs(x),
        }
    }
}
