//! Deterministic 1-D cubic resampling.
//!
//! Cubic convolution with the classic resize kernel (`a = -0.75`) and a
//! replicated border. Sample positions map destination index `i` to source
//! coordinate `(i + 0.5) * len_ratio - 0.5`, so the two grids share their
//! outer edges. The kernel can overshoot near sharp discontinuities; callers
//! that need a bounded range restore it afterwards.

const A: f64 = -0.75;

/// Cubic convolution weight for a sample at distance `t` from the output
/// position. Nonzero on `|t| < 2`; the four taps sum to one.
fn cubic_weight(t: f64) -> f64 {
    let t = t.abs();
    if t < 1.0 {
        ((A + 2.0) * t - (A + 3.0)) * t * t + 1.0
    } else if t < 2.0 {
        ((A * t - 5.0 * A) * t + 8.0 * A) * t - 4.0 * A
    } else {
        0.0
    }
}

/// Resamples `src` to exactly `dst_len` elements.
///
/// Identical inputs always produce identical outputs. A source of the target
/// length is returned unchanged.
pub(crate) fn resample_cubic(src: &[f64], dst_len: usize) -> Vec<f64> {
    debug_assert!(!src.is_empty());
    if src.len() == dst_len {
        return src.to_vec();
    }

    let last = src.len() as i64 - 1;
    let scale = src.len() as f64 / dst_len as f64;
    let mut dst = Vec::with_capacity(dst_len);
    for i in 0..dst_len {
        let center = (i as f64 + 0.5) * scale - 0.5;
        let base = center.floor();
        let frac = center - base;
        let mut acc = 0.0;
        for tap in -1i64..=2 {
            let idx = (base as i64 + tap).clamp(0, last) as usize;
            acc += src[idx] * cubic_weight(tap as f64 - frac);
        }
        dst.push(acc);
    }
    dst
}
