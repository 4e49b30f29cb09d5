//! Flat coordinate buffers: interleaved components with a fixed stride.
//!
//! Only the first two components of each tuple are ever transformed; anything
//! beyond them (elevation, time, ...) is left alone.

use num_traits::{Float, NumCast};

/// Normalize a tuple stride: anything below 2 means the default of 2.
#[inline]
pub fn normalize_dimension(dimension: usize) -> usize {
    if dimension > 1 {
        dimension
    } else {
        2
    }
}

/// Allocate the output buffer for an owned transform.
///
/// With a stride above 2 the input is copied so extra components survive;
/// otherwise a zeroed buffer is returned, since every slot gets overwritten.
pub fn allocate_output<T: Float>(input: &[T], dimension: usize) -> Vec<T> {
    if normalize_dimension(dimension) > 2 {
        input.to_vec()
    } else {
        vec![T::zero(); input.len()]
    }
}

/// Apply per-axis transforms to every tuple of `input`, writing into `output`.
///
/// `fx` maps the first component and `fy` the second; math is done in `f64`.
/// A trailing lone component only goes through `fx`, and nothing past the end
/// of `input` is read.
///
/// # Panics
/// If `output` is shorter than `input`.
pub fn transform_into<T, FX, FY>(
    input: &[T],
    output: &mut [T],
    dimension: usize,
    fx: FX,
    fy: FY,
) where
    T: Float,
    FX: Fn(f64) -> f64,
    FY: Fn(f64) -> f64,
{
    assert!(
        output.len() >= input.len(),
        "output buffer too short: {} values for an input of {}",
        output.len(),
        input.len()
    );
    let dimension = normalize_dimension(dimension);

    for (src, dst) in input.chunks(dimension).zip(output.chunks_mut(dimension)) {
        dst[0] = from_f64(fx(to_f64(src[0])));
        if let Some(&y) = src.get(1) {
            dst[1] = from_f64(fy(to_f64(y)));
        }
    }
}

#[inline]
fn to_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

#[inline]
fn from_f64<T: Float>(v: f64) -> T {
    <T as NumCast>::from(v).unwrap_or_else(T::nan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(v: f64) -> f64 {
        v * 2.0
    }

    fn negate(v: f64) -> f64 {
        -v
    }

    #[test]
    fn test_normalize_dimension() {
        assert_eq!(normalize_dimension(0), 2);
        assert_eq!(normalize_dimension(1), 2);
        assert_eq!(normalize_dimension(2), 2);
        assert_eq!(normalize_dimension(4), 4);
    }

    #[test]
    fn test_allocate_output() {
        let input = [1.0, 2.0, 3.0];
        assert_eq!(allocate_output(&input, 3), vec![1.0, 2.0, 3.0]);
        assert_eq!(allocate_output(&input, 2), vec![0.0, 0.0, 0.0]);
        assert_eq!(allocate_output(&input, 0), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_extra_components_untouched() {
        let input = [1.0, 2.0, 10.0, 3.0, 4.0, 20.0];
        let mut output = [-1.0; 6];
        transform_into(&input, &mut output, 3, double, negate);
        // Third slot of each tuple keeps whatever the output held.
        assert_eq!(output, [2.0, -2.0, -1.0, 6.0, -4.0, -1.0]);
    }

    #[test]
    fn test_trailing_lone_component_gets_x_transform() {
        let input = [1.0, 2.0, 3.0];
        let mut output = [0.0; 3];
        transform_into(&input, &mut output, 2, double, negate);
        assert_eq!(output, [2.0, -2.0, 6.0]);
    }

    #[test]
    fn test_trailing_partial_tuple() {
        let input = [1.0, 2.0, 9.0, 3.0, 4.0];
        let mut output = [0.0; 5];
        transform_into(&input, &mut output, 3, double, negate);
        assert_eq!(output, [2.0, -2.0, 0.0, 6.0, -4.0]);

        let input = [1.0, 2.0, 9.0, 3.0];
        let mut output = [0.0; 4];
        transform_into(&input, &mut output, 3, double, negate);
        assert_eq!(output, [2.0, -2.0, 0.0, 6.0]);
    }

    #[test]
    fn test_longer_output_tail_untouched() {
        let input = [1.0, 2.0, 3.0];
        let mut output = [7.0; 5];
        transform_into(&input, &mut output, 2, double, negate);
        assert_eq!(output, [2.0, -2.0, 6.0, 7.0, 7.0]);
    }

    #[test]
    fn test_f32_buffers() {
        let input: [f32; 2] = [0.5, 1.5];
        let mut output = [0.0f32; 2];
        transform_into(&input, &mut output, 2, double, negate);
        assert_eq!(output, [1.0, -1.5]);
    }

    #[test]
    #[should_panic(expected = "output buffer too short")]
    fn test_short_output_panics() {
        let input = [1.0, 2.0, 3.0, 4.0];
        let mut output = [0.0; 2];
        transform_into(&input, &mut output, 2, double, negate);
    }

    #[test]
    fn test_empty_input() {
        let input: [f64; 0] = [];
        let mut output: [f64; 0] = [];
        transform_into(&input, &mut output, 2, double, negate);
        assert!(allocate_output(&input, 2).is_empty());
    }
}
