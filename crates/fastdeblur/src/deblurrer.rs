//! High-level restoration API.
//!
//! [`Deblurrer`] is the primary entry point for restoring disk-blurred
//! images. It wraps a [`FastMethodConfig`] and pairs the restoration with
//! the matching forward blur.

use image::RgbImage;

use crate::blur;
use crate::deconv::{self, FastMethodConfig};
use crate::error::Error;

/// Primary restoration interface.
///
/// Encapsulates the deconvolution configuration. Create once, restore many
/// images degraded by the same blur.
///
/// # Examples
///
/// ```no_run
/// use fastdeblur::Deblurrer;
///
/// let deblurrer = Deblurrer::new(16.0);
/// let mut img = image::open("blurred.png").unwrap().to_rgb8();
/// deblurrer.deblur(&mut img).unwrap();
/// img.save("restored.png").unwrap();
/// ```
pub struct Deblurrer {
    config: FastMethodConfig,
}

impl Deblurrer {
    /// Create a deblurrer for a known blur radius with the default iteration
    /// count and strength.
    pub fn new(radius: f32) -> Self {
        Self {
            config: FastMethodConfig {
                radius,
                ..FastMethodConfig::default()
            },
        }
    }

    /// Create with full config control.
    pub fn with_config(config: FastMethodConfig) -> Self {
        Self { config }
    }

    /// Access the current configuration.
    pub fn config(&self) -> &FastMethodConfig {
        &self.config
    }

    /// Mutable access to configuration for post-construction tuning.
    pub fn config_mut(&mut self) -> &mut FastMethodConfig {
        &mut self.config
    }

    /// Restore `image` in place.
    pub fn deblur(&self, image: &mut RgbImage) -> Result<(), Error> {
        deconv::fast_method(image, &self.config)
    }

    /// Degrade `image` in place with the disk blur this deblurrer inverts.
    pub fn blur(&self, image: &mut RgbImage) -> Result<(), Error> {
        blur::disk_blur(image, self.config.radius)
    }
}
