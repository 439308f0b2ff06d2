//! Builtin descriptors for the nine grahas.
//!
//! Sources: Brihat Parashara Hora Shastra chapter 3, Brihat Jataka chapters 1
//! and 2. Each submodule authors one descriptor; [`builtin`] validates them
//! once and shares them process-wide.

mod bu;
mod ch;
mod gu;
mod ke;
mod ma;
mod ra;
mod sa;
mod sk;
mod sy;

use std::sync::LazyLock;

use crate::descriptor::ObjectDescriptor;
use crate::errors::CoreError;
use crate::keys::ObjectKey;

/// Aspect weights shared by grahas without special aspects (Brihat Jataka 2.13):
/// full on the 7th, three quarters on the 4th and 8th, half on the 5th and
/// 9th, a quarter on the 3rd and 10th.
pub(crate) const GENERIC_ASPECTS: [f64; 12] =
    [1.0, 0.0, 0.25, 0.75, 0.5, 0.0, 1.0, 0.75, 0.5, 0.25, 0.0, 0.0];

/// Rahu and Ketu aspect the 5th, 7th and 9th fully.
pub(crate) const NODE_ASPECTS: [f64; 12] =
    [1.0, 0.0, 0.25, 0.75, 1.0, 0.0, 1.0, 0.75, 1.0, 0.25, 0.0, 0.0];

static BUILTIN: LazyLock<Vec<ObjectDescriptor>> = LazyLock::new(|| {
    try_build().unwrap_or_else(|e| panic!("builtin graha descriptors are invalid: {e}"))
});

/// Build and validate every builtin descriptor, in key order.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if any authored descriptor is invalid.
pub fn try_build() -> Result<Vec<ObjectDescriptor>, CoreError> {
    let descriptors = vec![
        sy::descriptor()?,
        ch::descriptor()?,
        ma::descriptor()?,
        bu::descriptor()?,
        gu::descriptor()?,
        sk::descriptor()?,
        sa::descriptor()?,
        ra::descriptor()?,
        ke::descriptor()?,
    ];
    for descriptor in &descriptors {
        descriptor.validate()?;
    }
    Ok(descriptors)
}

/// All builtin descriptors, in key order.
///
/// # Panics
///
/// Panics on first use if the authored tables fail validation. The table is
/// covered by tests, so this is not expected in practice.
#[must_use]
pub fn builtin() -> &'static [ObjectDescriptor] {
    &BUILTIN
}

/// The builtin descriptor for `key`.
///
/// # Panics
///
/// See [`builtin`].
#[must_use]
pub fn descriptor(key: ObjectKey) -> &'static ObjectDescriptor {
    &BUILTIN[key as usize]
}
