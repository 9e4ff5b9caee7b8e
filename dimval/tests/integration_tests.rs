//! Integration-level tests for the `dimval` facade crate.

use dimval::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn scenario_a_non_standard_unit_normalizes() {
    let l = Scalar::<Length>::new(100.0, &MILLIMETER);
    assert_relative_eq!(l.si(), 0.1);
    assert_relative_eq!(l.in_unit(), 100.0);
    assert_eq!(l.tag(), Tag::Relative);
}

#[test]
fn scenario_b_force_times_length() {
    let f = Scalar::<Force>::from_si(10.0);
    let l = Scalar::<Length>::from_si(2.0);

    let work = f.times(&l).unwrap();
    assert_eq!(work.si(), 20.0);
    assert_eq!(work.dimensions(), Force::DIMENSIONS.plus(Length::DIMENSIONS));
    assert_eq!(work.unit().name(), "joule");
    assert_eq!(work.tag(), Tag::Relative);

    let typed: Scalar<Energy> = f * l;
    assert_eq!(typed.si(), 20.0);
    assert_eq!(work.cast::<Energy>().unwrap(), typed);
}

#[test]
fn scenario_c_positions_and_lengths() {
    let a = Position::from_si(5.0);
    let b = Position::from_si(2.0);
    let d: Scalar<Length> = &a - &b;
    assert_eq!(d.si(), 3.0);
    assert_eq!(d.tag(), Tag::Relative);

    let back: Position = b + d;
    assert_eq!(back.si(), 5.0);
    assert_eq!(back, a);
}

#[test]
fn scenario_d_dense_to_sparse() {
    let dense = LengthVector::new(&[0.0, 3.0, 0.0, 7.0], &METER, StorageType::Dense).unwrap();
    let sparse = dense.to_sparse();
    assert_eq!(sparse.storage_type(), StorageType::Sparse);
    assert_eq!(sparse.cardinality(), 2);
    match sparse.storage() {
        Storage::Sparse { indices, .. } => assert_eq!(indices, &vec![1, 3]),
        Storage::Dense(_) => panic!("expected sparse storage"),
    }
    assert_eq!(sparse.to_dense().values_si(), vec![0.0, 3.0, 0.0, 7.0]);
}

#[test]
fn scenario_e_empty_vector_is_rejected() {
    let err = LengthVector::new(&[], &METER, StorageType::Dense).unwrap_err();
    assert_eq!(err, Error::EmptyValues("vector"));
    assert!(Vector::<Mass>::from_sparse_map(&BTreeMap::new(), 4, &KILOGRAM, StorageType::Sparse)
        .is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Units and the registry
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn custom_units_behave_like_predefined_ones() {
    let furlong = Unit::<Length>::scaled("furlong", "fur", 201.168).unwrap();
    let race = Scalar::<Length>::new(8.0, &furlong);
    assert_relative_eq!(race.in_units_of(&MILE), 1.0, max_relative = 1e-12);
    assert_eq!(race.to_string(), "8 fur");

    let reaumur = Unit::<Temperature>::affine("reaumur", "°Ré", 1.25, 273.15).unwrap();
    let t = AbsoluteTemperature::new(80.0, &reaumur);
    assert_abs_diff_eq!(t.in_units_of(&DEGREE_CELSIUS), 100.0, epsilon = 1e-9);

    assert!(Unit::<Length>::scaled("nothing", "", f64::NAN).is_err());
    assert!(matches!(
        Unit::<Temperature>::affine("odd", "o", 1.0, f64::INFINITY),
        Err(Error::InvalidOffset(_))
    ));
}

#[test]
fn isolated_registries_do_not_share_state() {
    let a = UnitRegistry::new();
    let b = UnitRegistry::new();
    let jerk: Dimensions = "m/s3".parse().unwrap();

    let created = a.lookup_or_create(jerk);
    assert_eq!(created.origin(), Origin::Synthesized);
    assert!(a.lookup(&jerk).is_some());
    assert!(b.lookup(&jerk).is_none());
}

#[test]
fn registry_from_configuration() {
    let config = RegistryConfig::from_toml_str(
        r#"
        include_standard_units = false

        [[unit]]
        name = "newton meter"
        abbreviation = "N.m"
        dimensions = "kg.m2/s2"
        "#,
    )
    .unwrap();
    let registry = UnitRegistry::from_config(&config).unwrap();

    let torque = Scalar::<Force>::new(3.0, &NEWTON)
        .times_in(&Scalar::<Length>::new(2.0, &METER), &registry)
        .unwrap();
    assert_eq!(torque.unit().abbreviation(), "N.m");
    assert_eq!(torque.si(), 6.0);
}

#[test]
fn derived_units_are_shared() {
    let registry = UnitRegistry::with_standard_units();
    let x = Scalar::<Mass>::new(2.0, &KILOGRAM);
    let y = Scalar::<Duration>::new(4.0, &SECOND);
    let p = x.times_in(&y, &registry).unwrap();
    let q = y.times_in(&x, &registry).unwrap();
    assert!(Arc::ptr_eq(p.unit().descriptor(), q.unit().descriptor()));
    assert_eq!(p.unit().name(), "SI[kg.s]");
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalars
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fast_path_keeps_caller_unit() {
    let a = Scalar::<Energy>::new(1.5, &KILOWATT_HOUR);
    let b = Scalar::<Energy>::new(0.5, &KILOWATT_HOUR);
    let total = a + b;
    assert_eq!(total.unit(), &*KILOWATT_HOUR);
    assert_eq!(total.in_unit(), 2.0);
}

#[test]
fn interpolation_and_extremes() {
    let zero = Time::new(0.0, &HOUR);
    let one = Time::new(2.0, &HOUR);
    let mid = Scalar::interpolate(&zero, &one, 0.25);
    assert_relative_eq!(mid.in_unit(), 0.5);
    assert_eq!(Scalar::interpolate(&zero, &one, 0.0), zero);
    assert_eq!(Scalar::interpolate(&zero, &one, 1.0), one);

    let values = [
        Scalar::<Power>::new(1.0, &KILOWATT),
        Scalar::<Power>::new(2.0, &HORSEPOWER),
        Scalar::<Power>::new(900.0, &WATT),
    ];
    let max = Scalar::max_of(values.iter().cloned()).unwrap();
    assert_eq!(max.unit(), &*HORSEPOWER);
    let min = Scalar::min_of(values.iter().cloned()).unwrap();
    assert_eq!(min.unit(), &*WATT);
}

#[test]
fn ordering_and_sentinels() {
    let short = Scalar::<Length>::new(1.0, &FOOT);
    let long = Scalar::<Length>::new(1.0, &METER);
    assert!(short < long);
    assert!(Scalar::<Length>::nan().is_nan());
    assert!(Scalar::<Length>::infinity() > long);
    assert!(Scalar::<Length>::neg_infinity() < short);
    assert_eq!(Scalar::<Length>::zero().si(), 0.0);
}

#[test]
fn same_family_ratio_is_dimensionless() {
    let ratio: Scalar<Dimensionless> =
        Scalar::<Speed>::new(36.0, &KILOMETER_PER_HOUR) / Scalar::<Speed>::from_si(5.0);
    assert_relative_eq!(ratio.si(), 2.0, max_relative = 1e-12);
    assert_relative_eq!(ratio.in_units_of(&PERCENT), 200.0, max_relative = 1e-12);
}

#[test]
fn angles_wrap() {
    let heading = Direction::new(370.0, &DEGREE).normalize();
    assert_abs_diff_eq!(heading.in_unit(), 10.0, epsilon = 1e-9);
    let turn = Direction::new(10.0, &DEGREE).signed_separation(&Direction::new(340.0, &DEGREE));
    assert_abs_diff_eq!(turn.in_units_of(&DEGREE), 30.0, epsilon = 1e-9);
}

// ─────────────────────────────────────────────────────────────────────────────
// Vectors and matrices
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn vectors_from_mixed_scalars() {
    let v = Vector::from_scalars(
        &[
            Scalar::<Length>::new(1.0, &KILOMETER),
            Scalar::<Length>::new(250.0, &METER),
        ],
        StorageType::Dense,
    )
    .unwrap();
    assert_eq!(v.unit(), &*KILOMETER);
    assert_eq!(v.values_in_unit(), vec![1.0, 0.25]);
    assert_eq!(v.get(1).unwrap().in_units_of(&METER), 250.0);
}

#[test]
fn speed_vector_from_relation() {
    let d = LengthVector::new(&[100.0, 0.0, 400.0], &METER, StorageType::Sparse).unwrap();
    let t = Vector::<Duration>::new(&[10.0, 10.0, 20.0], &SECOND, StorageType::Dense).unwrap();
    let v: Vector<Speed> = d.divide_by(&t).unwrap().cast().unwrap();
    assert_eq!(v.values_si(), vec![10.0, 0.0, 20.0]);
}

#[test]
fn matrix_round_trip() {
    let mut map = BTreeMap::new();
    map.insert((0, 0), 1.0);
    map.insert((2, 1), -4.0);
    let m = LengthMatrix::from_sparse_map(&map, 3, 2, &CENTIMETER, StorageType::Sparse).unwrap();
    assert_eq!(m.rows(), 3);
    assert_eq!(m.cols(), 2);
    let dense = m.to_dense();
    assert_eq!(dense.storage_type(), StorageType::Dense);
    assert_eq!(dense, m);
    assert_eq!(
        dense.values_in_unit(),
        vec![vec![1.0, 0.0], vec![0.0, 0.0], vec![0.0, -4.0]]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

fn finite() -> impl Strategy<Value = f64> {
    -1e9..1e9f64
}

proptest! {
    #[test]
    fn prop_unit_round_trip(v in finite()) {
        for unit in [&*DEGREE_CELSIUS, &*DEGREE_FAHRENHEIT, &*KELVIN] {
            let back = unit.from_standard(unit.to_standard(v));
            prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }

    #[test]
    fn prop_abs_rel_invariant(a in finite(), b in finite()) {
        let a1 = Position::new(a, &KILOMETER);
        let a2 = Position::new(b, &METER);
        let d = &a1 - &a2;
        let back = d + a2;
        prop_assert!((back.si() - a1.si()).abs() <= 1e-6 * a1.si().abs().max(1.0));

        let r1 = Scalar::<Length>::new(a, &MILE);
        let r2 = Scalar::<Length>::new(b, &MILE);
        let again = (&r1 + &r2) - r2;
        prop_assert!((again.si() - r1.si()).abs() <= 1e-6 * (r1.si().abs() + 1.0) * 1e3);
    }

    #[test]
    fn prop_derivation_inverse(x in finite(), y in 1.0..1e6f64) {
        let a = Scalar::<Force>::from_si(x);
        let b = Scalar::<Duration>::from_si(y);
        let back = a.times(&b).unwrap().divide_by(&b).unwrap();
        prop_assert_eq!(back.dimensions(), Force::DIMENSIONS);
        prop_assert!((back.si() - x).abs() <= 1e-9 * x.abs().max(1.0));
    }

    #[test]
    fn prop_dense_sparse_equivalence(
        values in prop::collection::vec(prop_oneof![Just(0.0), finite()], 1..128)
    ) {
        let dense = LengthVector::new(&values, &METER, StorageType::Dense).unwrap();
        let sparse = LengthVector::new(&values, &METER, StorageType::Sparse).unwrap();
        prop_assert_eq!(dense.to_sparse().to_dense().values_si(), dense.values_si());
        prop_assert_eq!(sparse.to_dense().to_sparse().to_dense(), sparse.to_dense());
        prop_assert_eq!(dense.minus(&sparse).unwrap().cardinality(), 0);
    }

    #[test]
    fn prop_interpolation_boundaries(a in finite(), b in finite()) {
        let zero = AbsoluteTemperature::new(a, &DEGREE_CELSIUS);
        let one = AbsoluteTemperature::new(b, &KELVIN);
        prop_assert_eq!(Scalar::interpolate(&zero, &one, 0.0), zero.clone());
        prop_assert_eq!(Scalar::interpolate(&zero, &one, 1.0), one);
    }
}
