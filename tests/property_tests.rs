use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vecops::prelude::*;

const TRIALS: usize = 200;
const TOL: f64 = 1e-9;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Helper: random vector of length `n` with entries in [-100, 100)
fn random_vector(rng: &mut StdRng, n: usize) -> Vector {
    (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect()
}

fn assert_close(a: &Vector, b: &Vector) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert!(
            (x - y).abs() <= TOL * (1.0 + x.abs().max(y.abs())),
            "{} vs {}",
            a,
            b
        );
    }
}

#[test]
fn scalar_mul_then_inverse_recovers_input() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..16);
        let v = random_vector(&mut rng, n);
        let s = loop {
            let s: f64 = rng.gen_range(-50.0..50.0);
            if s.abs() > 1e-3 {
                break s;
            }
        };
        assert_close(&scalar_mul(&scalar_mul(&v, s), 1.0 / s), &v);
    }
}

#[test]
fn add_is_commutative() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..16);
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, n);
        assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }
}

#[test]
fn add_is_associative_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..16);
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, n);
        let c = random_vector(&mut rng, n);
        let left = add(&add(&a, &b).unwrap(), &c).unwrap();
        let right = add(&a, &add(&b, &c).unwrap()).unwrap();
        assert_close(&left, &right);
    }
}

#[test]
fn double_negation_is_identity() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..16);
        let v = random_vector(&mut rng, n);
        assert!(equals(&negate(&negate(&v)), &v));
        assert!(equals(&v, &v));
    }
}

#[test]
fn sub_matches_add_of_negation() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..16);
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, n);
        assert_eq!(sub(&a, &b).unwrap(), add(&a, &negate(&b)).unwrap());
    }
}

#[test]
fn cross_is_orthogonal_to_operands() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..TRIALS {
        let a = random_vector(&mut rng, 3);
        let b = random_vector(&mut rng, 3);
        let c = cross_product(&a, &b).unwrap();
        let scale = a.norm() * b.norm() * c.norm() + 1.0;
        assert!(dot_product(&a, &c).unwrap().abs() <= TOL * scale);
        assert!(dot_product(&b, &c).unwrap().abs() <= TOL * scale);
    }
}

#[test]
fn mismatched_lengths_are_rejected() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..16);
        let m = loop {
            let m = rng.gen_range(0..16);
            if m != n {
                break m;
            }
        };
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, m);
        let want = VectorError::LengthMismatch { left: n, right: m };

        assert!(!equals(&a, &b));
        assert_eq!(add(&a, &b), Err(want));
        assert_eq!(mul(&a, &b), Err(want));
        assert_eq!(dot_product(&a, &b), Err(want));
    }
}

#[test]
fn cross_rejects_non_three_lengths() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..8);
        let m = rng.gen_range(0..8);
        if n == 3 && m == 3 {
            continue;
        }
        let a = random_vector(&mut rng, n);
        let b = random_vector(&mut rng, m);
        assert_eq!(
            cross_product(&a, &b),
            Err(VectorError::DimensionError {
                expected: 3,
                left: n,
                right: m
            })
        );
    }
}
