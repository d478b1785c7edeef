//! Conformance: Exchange Symmetry
//!
//! Invariants under test:
//! - Both parties derive the same secret for every `bob, alice` in
//!   `[1, modulus)`
//! - Derived values lie in `[0, modulus)`
//! - Keys `0` and `modulus` are rejected, never clamped
//! - A peer public value is used as given; only the own key is checked
//! - Under the classroom parameters every derived value is `1`

use num_bigint::{BigInt, BigUint};
use num_traits::One;
use tutor_core::key_exchange::{
    compute_public_key, compute_shared_secret, negotiate, PublicKey,
};
use tutor_core::params::DhParameters;
use tutor_core::TutorError;

fn parameter_sets() -> Vec<DhParameters> {
    vec![
        DhParameters::classroom(),
        DhParameters::from_u64(23, 5).unwrap(),
        DhParameters::from_u64(97, 5).unwrap(),
        // Composite modulus, non-primitive generator: still symmetric.
        DhParameters::from_u64(20, 3).unwrap(),
    ]
}

fn modulus_u64(params: &DhParameters) -> u64 {
    params.modulus().to_u64_digits().first().copied().unwrap_or(0)
}

#[test]
fn conformance_secrets_agree_for_every_key_pair() {
    for params in parameter_sets() {
        let p = modulus_u64(&params);
        for bob in 1..p {
            for alice in 1..p {
                let report = negotiate(&params, &BigInt::from(bob), &BigInt::from(alice))
                    .unwrap_or_else(|e| panic!("p={p} bob={bob} alice={alice}: {e}"));
                assert!(report.secret().value() < params.modulus());
            }
        }
    }
}

#[test]
fn conformance_each_side_matches_report() {
    let params = DhParameters::from_u64(97, 5).unwrap();
    let (bob, alice) = (BigInt::from(36), BigInt::from(58));

    let bob_public = compute_public_key(&params, &bob).unwrap();
    let alice_public = compute_public_key(&params, &alice).unwrap();
    let secret_bob = compute_shared_secret(&params, &bob, &alice_public).unwrap();
    let secret_alice = compute_shared_secret(&params, &alice, &bob_public).unwrap();
    assert_eq!(secret_bob, secret_alice);

    let report = negotiate(&params, &bob, &alice).unwrap();
    assert_eq!(report.bob_public(), &bob_public);
    assert_eq!(report.alice_public(), &alice_public);
    assert_eq!(report.secret(), &secret_bob);
}

#[test]
fn conformance_range_bounds_rejected() {
    for params in parameter_sets() {
        let modulus = BigInt::from(params.modulus().clone());
        for bad in [BigInt::from(0), modulus.clone(), modulus + 1, BigInt::from(-5)] {
            let err = compute_public_key(&params, &bad).unwrap_err();
            assert!(
                matches!(err, TutorError::InvalidKeyRange { ref key, .. } if *key == bad),
                "expected InvalidKeyRange for {bad}, got {err:?}"
            );
        }
    }
}

#[test]
fn conformance_peer_public_not_range_checked() {
    let params = DhParameters::from_u64(23, 5).unwrap();
    // Outside [0, p), as if typed in from another session.
    let peer = PublicKey::from(BigUint::from(1000u32));
    let secret = compute_shared_secret(&params, &BigInt::from(2), &peer).unwrap();
    assert_eq!(secret.value(), &(BigUint::from(1000u32).pow(2) % 23u32));

    let err = compute_shared_secret(&params, &BigInt::from(23), &peer).unwrap_err();
    assert!(matches!(err, TutorError::InvalidKeyRange { .. }));
}

#[test]
fn conformance_classroom_parameters_collapse() {
    let params = DhParameters::classroom();
    assert!(params.is_degenerate());
    for bob in 1..13 {
        for alice in 1..13 {
            let report = negotiate(&params, &BigInt::from(bob), &BigInt::from(alice)).unwrap();
            assert!(report.bob_public().value().is_one());
            assert!(report.alice_public().value().is_one());
            assert_eq!(report.secret().value(), &BigUint::one());
        }
    }
}
