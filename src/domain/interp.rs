// One-dimensional linear interpolation over sorted knots

/// Interpolate a single value from the table `(xp, fp)`.
///
/// Strictly linear between adjacent knots. Returns `None` when `x` lies
/// outside `[xp[0], xp[last]]` - out-of-range values are never extrapolated.
///
/// `xp` must be sorted ascending. Duplicate x-values are a caller
/// data-quality issue: the bracket is located with `partition_point`, so a
/// query landing on a duplicated knot resolves to that knot's value, and a
/// zero-width bracket is never divided through for an exact hit. No attempt
/// is made to repair such tables.
pub fn interp_one(x: f64, xp: &[f64], fp: &[f64]) -> Option<f64> {
    let (&x_first, &x_last) = (xp.first()?, xp.last()?);
    if x < x_first || x > x_last {
        return None;
    }

    // Binary search for the bracket
    let idx = xp.partition_point(|&v| v < x);
    if idx == 0 {
        return Some(fp[0]);
    }
    if xp[idx] == x {
        return Some(fp[idx]);
    }

    let lo = idx - 1;
    let t = (x - xp[lo]) / (xp[idx] - xp[lo]);
    Some(fp[lo] + t * (fp[idx] - fp[lo]))
}
