//! Aspect (drishti) strength by house offset.

use graha_core::{House, ObjectDescriptor};

/// Strength of the aspect cast from `from` onto `to`.
#[must_use]
pub fn strength(descriptor: &ObjectDescriptor, from: House, to: House) -> f64 {
    descriptor.aspects.between(from, to)
}

/// Houses receiving a non-zero aspect from `from`, in offset order starting
/// with `from` itself.
#[must_use]
pub fn aspected_houses(descriptor: &ObjectDescriptor, from: House) -> Vec<(House, f64)> {
    (0..12u8)
        .filter_map(|step| {
            let house = House::new((from.get() - 1 + step) % 12 + 1).ok()?;
            let weight = strength(descriptor, from, house);
            (weight > 0.0).then_some((house, weight))
        })
        .collect()
}
