//! Monetary conversion between local decimal prices and wire amounts.
//!
//! Prices are carried locally in major currency units (`19.99` dollars) and
//! transmitted to the payment platform in integer minor units (`1999` cents).

/// Currency code applied to every amount sent to the payment platform.
///
/// The whole system is fixed to a single currency.
pub const CURRENCY: &str = "usd";

/// Convert a price in major currency units to integer minor units.
///
/// Rounds half away from zero rather than truncating. The value is first
/// rounded to a tenth of a cent so that binary float representation error
/// cannot pull a half-cent price below the rounding boundary (`9.995` must
/// become `1000`, and `19.99` must become `1999`, not `1998`).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_minor_units(price: f64) -> i64 {
    let tenths_of_cents = (price * 1000.0).round();
    (tenths_of_cents / 10.0).round() as i64
}
