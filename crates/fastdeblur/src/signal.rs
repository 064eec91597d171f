//! One-dimensional operators: box blur and its iterative inverse.
//!
//! Both operate in place over a caller-supplied slice; the slice length is
//! the signal length.

use crate::bounds::clamp_index;
use crate::error::Error;

/// Blur `samples` in place with a box kernel of the given radius.
///
/// Each sample becomes the average of itself and its neighbors within
/// `radius`. Offsets falling outside the slice are excluded rather than
/// clamped, so the window shrinks near the edges and the divisor is the
/// in-range count.
pub fn box_blur(samples: &mut [f32], radius: usize) -> Result<(), Error> {
    if samples.is_empty() {
        return Err(Error::EmptyInput);
    }

    let n = samples.len();
    let r = radius as isize;
    let mut out = vec![0.0f32; n];

    for (i, out_i) in out.iter_mut().enumerate() {
        let mut total = 0.0f32;
        let mut count = 0u32;
        for j in -r..=r {
            let idx = i as isize + j;
            if idx >= 0 && (idx as usize) < n {
                total += samples[idx as usize];
                count += 1;
            }
        }
        *out_i = total / count as f32;
    }

    samples.copy_from_slice(&out);
    Ok(())
}

/// Iteratively invert a box blur of the given radius, in place.
///
/// Four clamped taps on the blurred input estimate the local gradient. The
/// estimate is scaled by `(2*radius + 1) / 2` computed in integer arithmetic
/// (the truncation is part of the method) and corrected with a low-pass term
/// sampled from the previous iterate at `±(2*radius + 1)`.
///
/// With `iterations == 0` the input is returned unchanged.
pub fn deconvolve(samples: &mut [f32], radius: usize, iterations: usize) -> Result<(), Error> {
    if samples.is_empty() {
        return Err(Error::EmptyInput);
    }
    if radius == 0 {
        return Err(Error::InvalidRadius { radius: 0.0 });
    }
    if iterations == 0 {
        return Ok(());
    }

    let n = samples.len();
    let r = radius as isize;
    let scale = ((2 * radius + 1) / 2) as f32;

    let input = samples.to_vec();
    let mut old = input.clone();
    let mut next = vec![0.0f32; n];

    for _ in 0..iterations {
        for (i, next_i) in next.iter_mut().enumerate() {
            let i = i as isize;
            let gradient = input[clamp_index(i + r, n)] + input[clamp_index(i - r, n)]
                - input[clamp_index(i + r + 1, n)]
                - input[clamp_index(i - r - 1, n)];
            let low_pass = (old[clamp_index(i + 2 * r + 1, n)]
                + old[clamp_index(i - 2 * r - 1, n)])
                / 2.0;
            *next_i = gradient * scale + low_pass;
        }
        old.copy_from_slice(&next);
    }

    samples.copy_from_slice(&next);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{box_blur, deconvolve};
    use crate::error::Error;
    use crate::synth;

    #[test]
    fn constant_signal_is_a_box_blur_fixed_point() {
        let mut samples = vec![3.25f32; 9];
        box_blur(&mut samples, 2).unwrap();
        assert_eq!(samples, vec![3.25f32; 9]);
    }

    #[test]
    fn zero_radius_blur_is_identity() {
        let mut samples = vec![1.0f32, -2.0, 4.5, 0.0];
        let expected = samples.clone();
        box_blur(&mut samples, 0).unwrap();
        assert_eq!(samples, expected);
    }

    #[test]
    fn blur_spreads_an_impulse() {
        let mut samples = synth::impulse(9);
        box_blur(&mut samples, 1).unwrap();
        let third = 1.0f32 / 3.0;
        assert_eq!(samples[3], third);
        assert_eq!(samples[4], third);
        assert_eq!(samples[5], third);
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn zero_iterations_is_identity() {
        let mut samples = vec![1.0f32, 2.0, 3.0, 4.0, 5.0];
        let expected = samples.clone();
        deconvolve(&mut samples, 1, 0).unwrap();
        assert_eq!(samples, expected);
    }

    #[test]
    fn scale_factor_truncates_like_the_reference() {
        // radius 2: the integer-arithmetic factor is 2, not 2.5. For the
        // centered impulse the low-pass term at index 3 is zero, so the
        // output there is exactly the gradient times the factor.
        let mut samples = synth::impulse(11);
        deconvolve(&mut samples, 2, 1).unwrap();
        assert_eq!(samples[3], 2.0);
        assert_eq!(samples[5], 0.0);
    }

    #[test]
    fn deconvolution_recovers_a_blurred_peak() {
        let mut samples = vec![0.0f32; 10];
        samples[4] = 5.0;
        box_blur(&mut samples, 1).unwrap();
        let blurred_peak = samples[4];

        deconvolve(&mut samples, 1, 5).unwrap();
        assert!(
            samples[4] > blurred_peak,
            "peak {} did not rise above blurred value {}",
            samples[4],
            blurred_peak
        );
    }

    #[test]
    fn rejects_invalid_inputs() {
        let mut empty: Vec<f32> = Vec::new();
        assert_eq!(box_blur(&mut empty, 1), Err(Error::EmptyInput));
        assert_eq!(deconvolve(&mut empty, 1, 1), Err(Error::EmptyInput));

        let mut samples = vec![1.0f32; 8];
        assert!(matches!(
            deconvolve(&mut samples, 0, 1),
            Err(Error::InvalidRadius { .. })
        ));
    }
}
