//! Brute-force group enumeration and protocol domain parameters

use crate::curve::{Curve, Point};
use crate::error::{Error, Result};
use crate::field::mul_mod;

/// Enumerate every point on the curve: the identity first, then each affine
/// (x, y) in increasing x, then increasing y within an x.
///
/// This walks the full coordinate square, O(p²) modular evaluations, and is
/// the one expensive operation in the crate. It exists so demonstration
/// fields can display the whole group and count its order; do not point it
/// at a large p.
pub fn enumerate_points(curve: &Curve) -> Vec<Point> {
    let p = curve.p();
    let mut points = vec![Point::Identity];
    for x in 0..p {
        let rhs = curve.equation_rhs(x);
        for y in 0..p {
            if mul_mod(y, y, p) == rhs {
                points.push(Point::Affine { x, y });
            }
        }
    }
    points
}

/// Domain parameters shared by every party in a protocol run: the curve, an
/// agreed generator G, and the order n used for scalar arithmetic.
///
/// This is the one value that travels between a front-end and the protocol
/// functions; the functions themselves stay stateless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subgroup {
    curve: Curve,
    generator: Point,
    order: u64,
}

impl Subgroup {
    /// Validate and bundle domain parameters.
    ///
    /// The generator must be an affine point on the curve, and the order at
    /// least 2 so scalar draws from `[1, n−1]` are possible.
    pub fn new(curve: Curve, generator: Point, order: u64) -> Result<Self> {
        let Point::Affine { x, y } = generator else {
            return Err(Error::InvalidParameter {
                name: "generator",
                reason: "must not be the point at infinity",
            });
        };
        if !curve.contains(generator) {
            return Err(Error::PointNotOnCurve { x, y });
        }
        if order < 2 {
            return Err(Error::InvalidParameter {
                name: "order",
                reason: "must be at least 2",
            });
        }
        Ok(Subgroup {
            curve,
            generator,
            order,
        })
    }

    /// Build domain parameters by brute force: G is the first affine point
    /// in enumeration order and n is the total point count, identity
    /// included.
    ///
    /// The order found this way is the order of the whole curve group; it
    /// equals the generator's order only when the point count is prime,
    /// which holds for the usual teaching curves.
    pub fn from_enumeration(curve: Curve) -> Result<Self> {
        let points = enumerate_points(&curve);
        let generator = points
            .iter()
            .copied()
            .find(|point| !point.is_identity())
            .ok_or(Error::EmptyGroup)?;
        Self::new(curve, generator, points.len() as u64)
    }

    /// The underlying curve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The agreed generator G
    pub fn generator(&self) -> Point {
        self.generator
    }

    /// The order n used for scalar and signature arithmetic
    pub fn order(&self) -> u64 {
        self.order
    }
}
