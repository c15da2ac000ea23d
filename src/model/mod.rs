//! Model Module
//!
//! Immutable, totally-ordered entities stored in the trip stores.
//!
//! ## Ordering
//! Every entity orders lexicographically by its fields in declaration order.
//! Floating point fields compare with `f64::total_cmp`, which makes equality
//! structural and consistent with the ordering (a requirement for use as a
//! `BTreeMap` key or `BTreeSet` element).
//! Strings compare by UTF-8 bytes, i.e. by code point; this differs from
//! UTF-16 code-unit order only for characters above U+FFFF compared with
//! characters in U+E000..=U+FFFF.

mod activity;
mod destination;
mod site;

pub use activity::Activity;
pub use destination::Destination;
pub use site::Site;

/// Render a float the way reports and exports print numbers
///
/// Always keeps a fractional part (`1000.0`). Magnitudes from 1e7 upwards
/// and below 1e-3 switch to scientific notation (`1.0E7`, `2.5E-4`).
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e7).contains(&magnitude) {
        let scientific = format!("{:e}", value);
        let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
        if mantissa.contains('.') {
            format!("{}E{}", mantissa, exponent)
        } else {
            format!("{}.0E{}", mantissa, exponent)
        }
    } else {
        format!("{:?}", value)
    }
}
