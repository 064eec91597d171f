//! Two-dimensional disk blur, the forward degrade operator.

use image::RgbImage;

use crate::error::Error;

/// Blur `image` in place by averaging each pixel over a disk neighborhood.
///
/// The disk contains every integer offset `(i, j)` with
/// `i² + j² ≤ (radius + 0.5)²`. Offsets landing outside the image are
/// excluded rather than clamped, so the average shrinks near the borders and
/// the divisor is the in-range count.
pub fn disk_blur(image: &mut RgbImage, radius: f32) -> Result<(), Error> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::InvalidRadius {
            radius: radius as f64,
        });
    }
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyInput);
    }

    let w = width as i64;
    let h = height as i64;
    let radius_max = (radius + 1.5) as i64;
    let radius_sq = (radius + 0.5) * (radius + 0.5);

    let src = image.as_raw().clone();
    let out = image.as_mut();

    for y in 0..h {
        for x in 0..w {
            let mut sum = [0u64; 3];
            let mut count = 0u64;

            for j in -radius_max..=radius_max {
                let yi = y + j;
                if yi < 0 || yi >= h {
                    continue;
                }
                for i in -radius_max..=radius_max {
                    let xi = x + i;
                    if xi < 0 || xi >= w {
                        continue;
                    }
                    if ((i * i + j * j) as f32) <= radius_sq {
                        let base = ((yi * w + xi) * 3) as usize;
                        sum[0] += src[base] as u64;
                        sum[1] += src[base + 1] as u64;
                        sum[2] += src[base + 2] as u64;
                        count += 1;
                    }
                }
            }

            // The center offset always qualifies, so count >= 1 here.
            let base = ((y * w + x) * 3) as usize;
            out[base] = (sum[0] / count) as u8;
            out[base + 1] = (sum[1] / count) as u8;
            out[base + 2] = (sum[2] / count) as u8;
        }
    }

    Ok(())
}
