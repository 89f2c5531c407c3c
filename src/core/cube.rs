//! Test for values of the form `w^3 + 1` with `w >= 0`.

use crate::domain::model::CubeCheck;

/// Checks whether `value = w^3 + 1` for some non-negative `w`, returning the witness.
///
/// `cbrt` only locates the candidate root. The float estimate can land one off
/// for large inputs, so the neighbours are verified as well, in exact integer arithmetic.
pub fn check(value: i64) -> CubeCheck {
    let candidate = match value.checked_sub(1) {
        Some(c) if c >= 0 => c as u64,
        _ => return CubeCheck::not_found(),
    };

    let estimate = (candidate as f64).cbrt().round() as u64;

    (estimate.saturating_sub(1)..=estimate + 1)
        .find(|w| cube(*w) == candidate as u128)
        .map(CubeCheck::found)
        .unwrap_or_else(CubeCheck::not_found)
}

pub fn is_cube_plus_one(value: i64) -> bool {
    check(value).is_cube_plus_one
}

fn cube(w: u64) -> u128 {
    let w = w as u128;
    w * w * w
}
