//! Reconstruction-quality metrics.

use image::RgbImage;

use crate::error::Error;

/// Mean-removed normalized root-mean-square error between two signals.
///
/// Each input's mean is subtracted before comparison, so a constant offset
/// between the signals does not register as error.
pub fn nrmse(a: &[f32], b: &[f32]) -> Result<f64, Error> {
    if a.is_empty() {
        return Err(Error::EmptyInput);
    }
    if a.len() != b.len() {
        return Err(Error::SizeMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let n = a.len() as f64;
    let mean_a = a.iter().map(|&v| v as f64).sum::<f64>() / n;
    let mean_b = b.iter().map(|&v| v as f64).sum::<f64>() / n;

    let mut total = 0.0f64;
    for (&va, &vb) in a.iter().zip(b) {
        let e = (va as f64 - mean_a) - (vb as f64 - mean_b);
        total += e * e;
    }

    Ok((total / n).sqrt())
}

/// Mean-removed NRMSE between two RGB images, averaged over all samples of
/// all three channels.
pub fn nrmse_rgb(a: &RgbImage, b: &RgbImage) -> Result<f64, Error> {
    let (w, h) = a.dimensions();
    if w == 0 || h == 0 {
        return Err(Error::EmptyInput);
    }
    if b.dimensions() != (w, h) {
        return Err(Error::SizeMismatch {
            expected: (w * h) as usize,
            actual: (b.width() * b.height()) as usize,
        });
    }

    let ra = a.as_raw();
    let rb = b.as_raw();
    let n = (w * h) as f64;

    let mut total = 0.0f64;
    for c in 0..3 {
        let mean_a = channel_mean(ra, c);
        let mean_b = channel_mean(rb, c);
        for (&va, &vb) in ra[c..].iter().step_by(3).zip(rb[c..].iter().step_by(3)) {
            let e = (va as f64 - mean_a) - (vb as f64 - mean_b);
            total += e * e;
        }
    }

    Ok((total / (n * 3.0)).sqrt())
}

fn channel_mean(raw: &[u8], channel: usize) -> f64 {
    let count = (raw.len() / 3) as f64;
    let sum: f64 = raw[channel..].iter().step_by(3).map(|&v| v as f64).sum();
    sum / count
}

#[cfg(test)]
mod tests {
    use super::{nrmse, nrmse_rgb};
    use crate::error::Error;
    use approx::assert_relative_eq;
    use image::{Rgb, RgbImage};

    #[test]
    fn identical_signals_have_zero_error() {
        let a = vec![1.0f32, 2.0, 3.0, 4.0];
        assert_eq!(nrmse(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn constant_offset_does_not_register() {
        let a = vec![1.0f32, 2.0, 3.0, 4.0];
        let b: Vec<f32> = a.iter().map(|v| v + 10.0).collect();
        assert_relative_eq!(nrmse(&a, &b).unwrap(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn known_two_sample_case() {
        let a = vec![0.0f32, 0.0];
        let b = vec![0.0f32, 2.0];
        assert_relative_eq!(nrmse(&a, &b).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn identical_images_have_zero_error() {
        let img = RgbImage::from_pixel(6, 4, Rgb([12, 34, 56]));
        assert_eq!(nrmse_rgb(&img, &img).unwrap(), 0.0);
    }

    #[test]
    fn rejects_mismatched_inputs() {
        let a = vec![1.0f32; 4];
        let b = vec![1.0f32; 5];
        assert!(matches!(nrmse(&a, &b), Err(Error::SizeMismatch { .. })));

        let img_a = RgbImage::new(4, 4);
        let img_b = RgbImage::new(4, 5);
        assert!(matches!(
            nrmse_rgb(&img_a, &img_b),
            Err(Error::SizeMismatch { .. })
        ));
    }
}
