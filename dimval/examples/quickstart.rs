//! Minimal end-to-end example: absolute and relative values, typed relations, registry
//! derivation and a sparse vector.

use dimval::{
    AbsoluteTemperature, Duration, Length, LengthVector, Position, Scalar, Speed, StorageType,
    Temperature, DEGREE_CELSIUS, HOUR, KELVIN, KILOMETER, KILOMETER_PER_HOUR, METER, MINUTE,
};

fn main() -> dimval::Result<()> {
    let start = Position::new(2.0, &KILOMETER);
    let end = Position::new(3_500.0, &METER);
    let travelled: Scalar<Length> = end - start;
    println!("travelled {travelled} ({travelled:#})");

    let elapsed = Scalar::<Duration>::new(6.0, &MINUTE);
    let speed: Scalar<Speed> = travelled.clone() / elapsed.clone();
    println!(
        "speed {:.2} km/h",
        speed.in_units_of(&KILOMETER_PER_HOUR)
    );

    let per_hour = travelled.divide_by(&Scalar::<Duration>::new(0.1, &HOUR))?;
    println!("same speed through the registry: {per_hour:.3}");

    let t = AbsoluteTemperature::new(21.5, &DEGREE_CELSIUS);
    let warmer = t.clone() + Scalar::<Temperature>::new(3.0, &KELVIN);
    println!("{t} -> {:.2}", warmer.with_unit(&DEGREE_CELSIUS));

    let v = LengthVector::new(&[0.0, 3.0, 0.0, 7.0], &METER, StorageType::Sparse)?;
    println!("{v:#} has {} populated entries, sum {}", v.cardinality(), v.z_sum());
    Ok(())
}
