#![allow(clippy::expect_used)]

use std::str::FromStr;

use super::*;
use crate::reflect::Null;

fn canon(value: &dyn Reflect) -> CanonicalNumeric {
    canonicalize(value).expect("numeric value")
}

#[test]
fn integers_of_every_width_agree() {
    let one = canon(&1_i32);
    assert_eq!(canon(&1_i8), one);
    assert_eq!(canon(&1_u16), one);
    assert_eq!(canon(&1_i64), one);
    assert_eq!(canon(&1_u128), one);
    assert_eq!(canon(&1_usize), one);
    assert_eq!(canon(&1_isize), one);
}

#[test]
fn integral_floats_equal_integers() {
    assert_eq!(canon(&1.0_f64), canon(&1_i32));
    assert_eq!(canon(&1.0_f32), canon(&1_u8));
    assert_eq!(canon(&-3.0_f64).as_str(), "-3");
}

#[test]
fn fractional_floats_differ_from_integers() {
    assert_ne!(canon(&1.1_f64), canon(&1_i32));
    assert_eq!(canon(&1.1_f64).as_str(), "1.1");
}

#[test]
fn f32_renders_at_its_own_precision() {
    assert_eq!(canon(&1.1_f32).as_str(), "1.1");
}

#[test]
fn decimals_drop_trailing_zeros() {
    let d = Decimal::from_str("1.0").expect("valid decimal");
    assert_eq!(canon(&d), canon(&1_i32));
    let d = Decimal::from_str("2.50").expect("valid decimal");
    assert_eq!(canon(&d).as_str(), "2.5");
    assert_eq!(canon(&d), canon(&2.5_f64));
}

#[test]
fn decimal_zero_is_plain_zero() {
    let d = Decimal::from_str("-0.000").expect("valid decimal");
    assert_eq!(canon(&d).as_str(), "0");
}

#[test]
fn decimal_one_point_one_is_not_one() {
    let d = Decimal::from_str("1.1").expect("valid decimal");
    assert_ne!(canon(&d), canon(&1_i32));
}

#[test]
fn large_integers_keep_full_precision() {
    assert_eq!(canon(&u64::MAX).as_str(), "18446744073709551615");
    assert_eq!(canon(&i128::MIN).as_str(), i128::MIN.to_string());
}

#[test]
fn non_numeric_values_do_not_canonicalize() {
    assert!(canonicalize(&"1".to_owned()).is_none());
    assert!(canonicalize(&true).is_none());
    assert!(canonicalize(&Null).is_none());
    assert!(canonicalize(&None::<i32>).is_none());
}

#[test]
fn optional_numbers_canonicalize_their_value() {
    assert_eq!(canon(&Some(7_u8)), canon(&7_i64));
}

#[test]
fn json_numbers_canonicalize() {
    let v: serde_json::Value = serde_json::json!(1);
    assert_eq!(canon(&v), canon(&1_i32));
    let v: serde_json::Value = serde_json::json!(1.5);
    assert_eq!(canon(&v).as_str(), "1.5");
    assert!(canonicalize(&serde_json::json!("1")).is_none());
}

#[test]
fn display_matches_text() {
    assert_eq!(canon(&42_i32).to_string(), "42");
}
