//! Diffie-Hellman shared-secret derivation

use crate::curve::{Curve, Point};
use crate::keys::{PublicKey, SecretScalar};

/// Compute the shared secret d·Q_peer.
///
/// For key pairs (d1, Q1) and (d2, Q2) over the same generator,
/// d1·Q2 = d2·Q1 = (d1·d2)·G, so both parties land on the same point.
/// Derivation of a symmetric key from that point (hashing its coordinates,
/// typically) is up to the caller.
pub fn shared_secret(secret: &SecretScalar, peer: &PublicKey, curve: &Curve) -> Point {
    curve.scalar_mult(secret.value(), peer.point())
}
