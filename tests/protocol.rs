//! End-to-end protocol tests: the walkthrough scenario on the 𝔽₁₇ teaching
//! curve, plus sign/verify and key-exchange properties on a curve large
//! enough that accidental forgeries are out of the picture.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use smallcurve::{
    enumerate_points, generate_keypair, is_prime, shared_secret, sign, verify, ByteSum, Curve,
    Point, PublicKey, SecretScalar, Signature, Subgroup,
};

/// y² = x³ + 3x + 7 over 𝔽₁₀₀₀₀₀₃; the group has prime order 999853, so
/// any affine point generates the whole group. Too big to enumerate in a
/// test, hence the hardcoded generator.
fn large_domain() -> Subgroup {
    let curve = Curve::new(3, 7, 1_000_003).unwrap();
    Subgroup::new(curve, Point::Affine { x: 2, y: 498_065 }, 999_853).unwrap()
}

#[test]
fn walkthrough_on_the_f17_curve() {
    // Fix p = 17 and the curve y² = x³ + 2x + 2
    assert!(is_prime(17));
    let curve = Curve::new(2, 2, 17).unwrap();
    assert_ne!(curve.discriminant(), 0);

    // Enumerate the group and derive domain parameters from it
    let points = enumerate_points(&curve);
    let domain = Subgroup::from_enumeration(curve).unwrap();
    assert_eq!(domain.order(), points.len() as u64);
    assert_eq!(domain.generator(), points[1]);
    assert!(!domain.generator().is_identity());

    // Key pair, signature, verification
    let mut rng = ChaCha20Rng::seed_from_u64(0xEC);
    let (secret, public) = generate_keypair(&domain, &mut rng);
    let signature = sign(b"test", &secret, &domain, &ByteSum, &mut rng).unwrap();
    assert!(verify(b"test", &signature, &public, &domain, &ByteSum));

    // Mutating s must break the signature. On a 19-element group the whole
    // s-range can be swept: only the matching s and its mirror n − s (the
    // usual ECDSA malleability) may verify.
    let n = domain.order();
    for s in 1..n {
        let candidate = Signature { r: signature.r, s };
        let expected = s == signature.s || s == n - signature.s;
        assert_eq!(
            verify(b"test", &candidate, &public, &domain, &ByteSum),
            expected,
            "s = {}",
            s
        );
    }
}

#[test]
fn key_exchange_on_the_f17_curve() {
    let curve = Curve::new(2, 2, 17).unwrap();
    let domain = Subgroup::from_enumeration(curve).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(0xD1F);

    let (alice_secret, alice_public) = generate_keypair(&domain, &mut rng);
    let (bob_secret, bob_public) = generate_keypair(&domain, &mut rng);
    assert_eq!(
        shared_secret(&alice_secret, &bob_public, &curve),
        shared_secret(&bob_secret, &alice_public, &curve)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip_verifies(message: Vec<u8>, seed: u64) {
        let domain = large_domain();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (secret, public) = generate_keypair(&domain, &mut rng);

        let signature = sign(&message, &secret, &domain, &ByteSum, &mut rng).unwrap();
        prop_assert!(verify(&message, &signature, &public, &domain, &ByteSum));
    }

    #[test]
    fn incremented_components_fail(message: Vec<u8>, seed: u64) {
        let domain = large_domain();
        let n = domain.order();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (secret, public) = generate_keypair(&domain, &mut rng);
        let signature = sign(&message, &secret, &domain, &ByteSum, &mut rng).unwrap();

        let bumped_r = Signature { r: (signature.r + 1) % n, s: signature.s };
        let bumped_s = Signature { r: signature.r, s: (signature.s + 1) % n };
        prop_assert!(!verify(&message, &bumped_r, &public, &domain, &ByteSum));
        prop_assert!(!verify(&message, &bumped_s, &public, &domain, &ByteSum));
    }

    #[test]
    fn flipped_message_bit_fails(mut message in prop::collection::vec(any::<u8>(), 1..64),
                                 byte_index: prop::sample::Index,
                                 bit in 0u8..8,
                                 seed: u64) {
        let domain = large_domain();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (secret, public) = generate_keypair(&domain, &mut rng);
        let signature = sign(&message, &secret, &domain, &ByteSum, &mut rng).unwrap();

        let index = byte_index.index(message.len());
        message[index] ^= 1 << bit;
        prop_assert!(!verify(&message, &signature, &public, &domain, &ByteSum));
    }

    #[test]
    fn key_exchange_is_symmetric(d1 in 1u64..999_853, d2 in 1u64..999_853) {
        let domain = large_domain();
        let curve = *domain.curve();
        let g = domain.generator();

        let alice = SecretScalar::new(d1);
        let bob = SecretScalar::new(d2);
        let alice_public = PublicKey::new(curve.scalar_mult(d1, g));
        let bob_public = PublicKey::new(curve.scalar_mult(d2, g));

        prop_assert_eq!(
            shared_secret(&alice, &bob_public, &curve),
            shared_secret(&bob, &alice_public, &curve)
        );
    }
}
