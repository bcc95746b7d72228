use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError, Valid};
use num_traits::{One, Zero};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use serial_test::serial;

use super::*;
use crate::config::DEFAULT_MODULUS;
use crate::modulus::{self, ModulusContext};
use crate::utils::errors::ParseError;

fn set(m: i64) {
    modulus::install(BigInt::from_i64(m)).unwrap();
}

fn fe(v: i64) -> FieldElement {
    FieldElement::from_i64(v).unwrap()
}

fn install_default_prime() {
    modulus::install(BigInt::from_decimal_str(DEFAULT_MODULUS).unwrap()).unwrap();
}

#[test]
#[serial]
fn small_prime_arithmetic() {
    set(13);
    assert_eq!(fe(10).try_add(&fe(5)).unwrap(), fe(2));
    assert_eq!(fe(10).try_mul(&fe(5)).unwrap(), fe(11));
    assert_eq!(fe(10).invert().unwrap(), fe(4));
    assert_eq!(fe(3).try_sub(&fe(5)).unwrap().to_decimal_string(), "11");
    assert_eq!(fe(4).negate().unwrap(), fe(9));
    assert_eq!(fe(5).square().unwrap(), fe(12));
    assert_eq!(fe(10).try_div(&fe(5)).unwrap(), fe(2));
}

#[test]
#[serial]
fn constructors_reduce_into_range() {
    set(13);
    assert_eq!(fe(-1).to_decimal_string(), "12");
    assert_eq!(fe(-27).to_decimal_string(), "12");
    assert_eq!(fe(13), FieldElement::zero().unwrap());
    assert_eq!(FieldElement::from_decimal_str("-000014").unwrap(), fe(12));
    assert_eq!(
        FieldElement::from_bigint(&BigInt::from_decimal_str("1000000000000000000000").unwrap())
            .unwrap()
            .to_decimal_string(),
        // 10^21 = 13 * 76923076923076923076 + 12
        "12"
    );
    assert_eq!(FieldElement::one().unwrap(), fe(1));
    assert_eq!(FieldElement::try_from(40i64).unwrap(), fe(1));
    assert_eq!("-1".parse::<FieldElement>().unwrap(), fe(12));
}

#[test]
#[serial]
fn representatives_stay_in_range() {
    install_default_prime();
    let m = modulus::current().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(0xfe);
    for _ in 0..200 {
        let a = FieldElement::random(&mut rng).unwrap();
        let b = FieldElement::random(&mut rng).unwrap();
        for r in [
            a.try_add(&b).unwrap(),
            a.try_sub(&b).unwrap(),
            a.try_mul(&b).unwrap(),
            a.negate().unwrap(),
        ] {
            assert!(!r.representative().is_negative());
            assert!(r.representative() < &m);
        }
    }
}

#[test]
#[serial]
fn byte_encoding() {
    set(97);
    assert_eq!(fe(256).to_bytes(), vec![0x3E]);
    assert!(FieldElement::zero().unwrap().to_bytes().is_empty());
    assert!(FieldElement::from_bytes(&[]).unwrap().is_zero());
    // 0x0100 = 256 = 62 mod 97
    assert_eq!(FieldElement::from_bytes(&[0x01, 0x00]).unwrap(), fe(62));

    install_default_prime();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..50 {
        let a = FieldElement::random(&mut rng).unwrap();
        let bytes = a.to_bytes();
        assert!(bytes.len() <= 16);
        assert_eq!(FieldElement::from_bytes(&bytes).unwrap(), a);
    }
}

#[test]
#[serial]
fn field_laws_over_prime() {
    install_default_prime();
    let zero = FieldElement::zero().unwrap();
    let one = FieldElement::one().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for _ in 0..100 {
        let a = FieldElement::random(&mut rng).unwrap();
        let b = FieldElement::random(&mut rng).unwrap();
        let c = FieldElement::random(&mut rng).unwrap();

        assert_eq!(a.try_add(&b).unwrap(), b.try_add(&a).unwrap());
        assert_eq!(a.try_mul(&b).unwrap(), b.try_mul(&a).unwrap());
        assert_eq!(
            a.try_add(&b).unwrap().try_add(&c).unwrap(),
            a.try_add(&b.try_add(&c).unwrap()).unwrap()
        );
        assert_eq!(
            a.try_mul(&b).unwrap().try_mul(&c).unwrap(),
            a.try_mul(&b.try_mul(&c).unwrap()).unwrap()
        );
        assert_eq!(
            a.try_mul(&b.try_add(&c).unwrap()).unwrap(),
            a.try_mul(&b).unwrap().try_add(&a.try_mul(&c).unwrap()).unwrap()
        );
        assert_eq!(a.try_add(&zero).unwrap(), a);
        assert_eq!(a.try_mul(&one).unwrap(), a);
        assert_eq!(a.try_add(&a.negate().unwrap()).unwrap(), zero);
        if !a.is_zero() {
            assert_eq!(a.try_mul(&a.invert().unwrap()).unwrap(), one);
        }
    }
}

#[test]
#[serial]
fn zero_and_non_units_are_not_invertible() {
    set(13);
    assert_eq!(
        FieldElement::zero().unwrap().invert(),
        Err(FieldError::NotInvertible {
            value: BigInt::zero(),
            modulus: BigInt::from_i64(13),
        })
    );
    assert!(matches!(
        fe(3).try_div(&fe(0)),
        Err(FieldError::NotInvertible { .. })
    ));

    set(9);
    assert_eq!(
        fe(6).invert(),
        Err(FieldError::NotInvertible {
            value: BigInt::from_i64(6),
            modulus: BigInt::from_i64(9),
        })
    );
    assert_eq!(fe(2).invert().unwrap(), fe(5));
}

#[test]
#[serial]
fn trivial_modulus_collapses_everything() {
    set(1);
    let zero = FieldElement::zero().unwrap();
    assert_eq!(FieldElement::one().unwrap(), zero);
    assert_eq!(fe(12345), zero);
    assert_eq!(zero.invert().unwrap(), zero);
    assert!(zero.to_bytes().is_empty());
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    assert!(FieldElement::random(&mut rng).unwrap().is_zero());
}

#[test]
#[serial]
fn uninitialized_context_is_an_error() {
    ModulusContext::global().reset();
    assert_eq!(FieldElement::zero(), Err(FieldError::UninitializedModulus));
    assert_eq!(FieldElement::from_i64(3), Err(FieldError::UninitializedModulus));
    assert_eq!(
        FieldElement::from_bytes(&[1]),
        Err(FieldError::UninitializedModulus)
    );
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    assert_eq!(
        FieldElement::random(&mut rng),
        Err(FieldError::UninitializedModulus)
    );
}

#[test]
#[serial]
fn malformed_decimal_is_a_parse_error() {
    set(13);
    assert_eq!(
        FieldElement::from_decimal_str("12x"),
        Err(FieldError::Parse(ParseError("12x".to_string())))
    );
    assert!("".parse::<FieldElement>().is_err());
}

#[test]
#[serial]
fn save_switch_restore_around_field_ops() {
    set(13);
    let snapshot = modulus::save().unwrap();

    set(97);
    assert_eq!(fe(256).to_bytes(), vec![0x3E]);

    modulus::restore(&snapshot).unwrap();
    assert_eq!(modulus::current().unwrap(), BigInt::from_i64(13));
    assert_eq!(fe(10).try_add(&fe(5)).unwrap(), fe(2));

    {
        let _guard = modulus::with_modulus(BigInt::from_i64(7)).unwrap();
        assert_eq!(fe(10), fe(3));
    }
    assert_eq!(fe(10).to_decimal_string(), "10");
}

#[cfg(not(feature = "modulus-check"))]
#[test]
#[serial]
fn cross_modulus_operands_use_active_modulus() {
    set(7);
    let a = fe(6);
    set(11);
    let one = fe(1);
    assert_eq!(a.try_add(&one).unwrap().to_decimal_string(), "7");
    assert_eq!((&a + &one).to_decimal_string(), "7");
}

#[cfg(feature = "modulus-check")]
#[test]
#[serial]
#[should_panic(expected = "used while modulus 11 is active")]
fn cross_modulus_operands_panic_under_check() {
    set(7);
    let a = fe(6);
    set(11);
    let _ = a.try_add(&fe(1));
}

#[test]
#[serial]
fn equality_ignores_modulus() {
    set(7);
    let a = fe(3);
    set(11);
    let b = fe(3);
    assert_eq!(a, b);
    assert_ne!(a, fe(4));
}

#[test]
#[serial]
fn operators_match_fallible_methods() {
    set(13);
    let a = fe(10);
    let b = fe(5);
    assert_eq!(&a + &b, fe(2));
    assert_eq!(a.clone() - b.clone(), fe(5));
    assert_eq!(&a * b.clone(), fe(11));
    assert_eq!(a.clone() / &b, fe(2));
    assert_eq!(-&a, fe(3));
    assert_eq!(-a.clone(), fe(3));

    let mut c = a.clone();
    c += &b;
    assert_eq!(c, fe(2));
    c -= fe(3);
    assert_eq!(c, fe(12));
    c *= &a;
    assert_eq!(c, fe(3));
    c /= fe(3);
    assert_eq!(c, fe(1));
}

#[test]
#[serial]
fn sum_product_and_num_traits() {
    set(13);
    let xs: Vec<FieldElement> = (1..=12).map(fe).collect();
    assert_eq!(xs.iter().sum::<FieldElement>(), fe(0));
    // Wilson: 12! = -1 mod 13
    assert_eq!(xs.iter().product::<FieldElement>(), fe(12));
    assert_eq!(xs.into_iter().take(3).sum::<FieldElement>(), fe(6));
    assert_eq!(Vec::<FieldElement>::new().into_iter().product::<FieldElement>(), fe(1));

    assert!(Zero::is_zero(&<FieldElement as Zero>::zero()));
    assert_eq!(<FieldElement as One>::one(), fe(1));
}

#[test]
#[serial]
#[should_panic(expected = "not invertible")]
fn division_operator_panics_on_zero_divisor() {
    set(13);
    let _ = fe(3) / fe(0);
}

#[test]
#[serial]
fn display_and_debug_print_the_representative() {
    set(13);
    assert_eq!(fe(-1).to_string(), "12");
    assert_eq!(format!("{:?}", fe(25)), "12");
}

#[test]
#[serial]
fn random_is_seed_deterministic_and_in_range() {
    set(97);
    let draw = |seed| {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        (0..32)
            .map(|_| FieldElement::random(&mut rng).unwrap())
            .collect::<Vec<_>>()
    };
    let first = draw(3);
    assert_eq!(first, draw(3));
    for x in &first {
        assert!(x.representative() < &BigInt::from_i64(97));
    }
}

#[test]
#[serial]
fn serde_round_trips() {
    install_default_prime();
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let a = FieldElement::random(&mut rng).unwrap();

    let packed = rmp_serde::to_vec(&a).unwrap();
    assert_eq!(rmp_serde::from_slice::<FieldElement>(&packed).unwrap(), a);

    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(serde_json::from_str::<FieldElement>(&json).unwrap(), a);

    let zero = FieldElement::zero().unwrap();
    assert_eq!(serde_json::to_string(&zero).unwrap(), "[]");
    assert_eq!(serde_json::from_str::<FieldElement>("[]").unwrap(), zero);
}

#[test]
#[serial]
fn serde_reduces_under_active_modulus() {
    set(97);
    // [0x01, 0x00] = 256
    let json = "[1,0]";
    assert_eq!(serde_json::from_str::<FieldElement>(json).unwrap(), fe(62));

    ModulusContext::global().reset();
    assert!(serde_json::from_str::<FieldElement>(json).is_err());
}

#[test]
#[serial]
fn ark_serialize_round_trip() {
    install_default_prime();
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let a = FieldElement::random(&mut rng).unwrap();

    let mut buf = Vec::new();
    a.serialize_compressed(&mut buf).unwrap();
    assert_eq!(buf.len(), a.compressed_size());
    assert_eq!(buf.len(), 8 + a.to_bytes().len());
    assert_eq!(FieldElement::deserialize_compressed(&buf[..]).unwrap(), a);
    assert!(a.check().is_ok());
}

#[test]
#[serial]
fn ark_validation_rejects_out_of_range() {
    set(1000);
    let a = fe(500);
    let mut buf = Vec::new();
    a.serialize_uncompressed(&mut buf).unwrap();

    set(97);
    assert!(matches!(a.check(), Err(SerializationError::InvalidData)));
    assert!(matches!(
        FieldElement::deserialize_uncompressed(&buf[..]),
        Err(SerializationError::InvalidData)
    ));
    // 500 = 5 * 97 + 15
    assert_eq!(
        FieldElement::deserialize_uncompressed_unchecked(&buf[..]).unwrap(),
        fe(15)
    );
}

#[test]
#[serial]
fn ark_reads_need_an_active_modulus() {
    set(97);
    let a = fe(42);
    let mut buf = Vec::new();
    a.serialize_compressed(&mut buf).unwrap();

    ModulusContext::global().reset();
    assert!(matches!(a.check(), Err(SerializationError::InvalidData)));
    assert!(matches!(
        FieldElement::deserialize_compressed(&buf[..]),
        Err(SerializationError::InvalidData)
    ));
    assert!(matches!(
        FieldElement::deserialize_compressed_unchecked(&buf[..]),
        Err(SerializationError::InvalidData)
    ));
}
