//! Deterministic signal and image fixtures for demos, tests, and benches.

use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Unit impulse at the center of a zeroed signal.
pub fn impulse(len: usize) -> Vec<f32> {
    let mut arr = vec![0.0; len];
    if len > 0 {
        arr[len / 2] = 1.0;
    }
    arr
}

/// Square impulse of half-width `radius`, one unit high, centered.
pub fn square_impulse(len: usize, radius: usize) -> Vec<f32> {
    let mut arr = vec![0.0; len];
    if len == 0 {
        return arr;
    }
    let mid = len / 2;
    for i in mid.saturating_sub(radius)..=(mid + radius).min(len - 1) {
        arr[i] = 1.0;
    }
    arr
}

/// Step function, one unit high over the second half.
pub fn step(len: usize) -> Vec<f32> {
    let mut arr = vec![0.0; len];
    for v in arr[len / 2..].iter_mut() {
        *v = 1.0;
    }
    arr
}

/// Sawtooth ramping from 0 to 1 over each period.
pub fn sawtooth(len: usize, period: usize) -> Vec<f32> {
    assert!(period >= 2, "period must be at least 2");
    (0..len)
        .map(|i| (i % period) as f32 / (period - 1) as f32)
        .collect()
}

/// Uniform noise in `[0, 1)` from a seeded generator.
pub fn noise(len: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0.0f32..1.0)).collect()
}

/// Render a flat disk on a flat background.
///
/// Pixels at distance `d <= radius` from `center` take `fg`, all others `bg`.
pub fn disk_image(
    width: u32,
    height: u32,
    center: [f32; 2],
    radius: f32,
    fg: Rgb<u8>,
    bg: Rgb<u8>,
) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center[0];
            let dy = y as f32 - center[1];
            let pix = if (dx * dx + dy * dy).sqrt() <= radius {
                fg
            } else {
                bg
            };
            img.put_pixel(x, y, pix);
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_has_unit_mass_at_center() {
        let arr = impulse(9);
        assert_eq!(arr.iter().sum::<f32>(), 1.0);
        assert_eq!(arr[4], 1.0);
    }

    #[test]
    fn square_impulse_covers_the_window() {
        let arr = square_impulse(11, 2);
        assert_eq!(&arr[3..=7], &[1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(arr[2], 0.0);
        assert_eq!(arr[8], 0.0);
    }

    #[test]
    fn sawtooth_ramps_to_one() {
        let arr = sawtooth(8, 4);
        assert_eq!(arr[0], 0.0);
        assert_eq!(arr[3], 1.0);
        assert_eq!(arr[4], 0.0);
    }

    #[test]
    fn noise_is_seeded_and_bounded() {
        let a = noise(64, 7);
        let b = noise(64, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (0.0..1.0).contains(&v)));
        assert_ne!(a, noise(64, 8));
    }

    #[test]
    fn disk_image_paints_foreground_inside() {
        let img = disk_image(16, 16, [8.0, 8.0], 4.0, Rgb([10, 20, 30]), Rgb([200, 200, 200]));
        assert_eq!(*img.get_pixel(8, 8), Rgb([10, 20, 30]));
        assert_eq!(*img.get_pixel(0, 0), Rgb([200, 200, 200]));
    }
}
