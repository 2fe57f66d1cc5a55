/// Round half-up (`floor(x + 0.5)`), so `2.5 -> 3` and `-2.5 -> -2`.
///
/// `f64::round` rounds half away from zero, which disagrees on negative
/// halves; every published threshold and reference figure uses half-up.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Half-up rounding into a non-negative count. Negative and NaN inputs give 0,
/// values beyond `u64::MAX` saturate.
pub fn round_count(x: f64) -> u64 {
    let r = round_half_up(x);
    if r.is_nan() || r <= 0.0 {
        0
    } else {
        r as u64
    }
}

/// `ceil(x)` into a non-negative count with the same saturation rules as
/// [`round_count`].
pub fn ceil_count(x: f64) -> u64 {
    let c = x.ceil();
    if c.is_nan() || c <= 0.0 {
        0
    } else {
        c as u64
    }
}
