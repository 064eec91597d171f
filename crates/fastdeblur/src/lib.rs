//! fastdeblur — iterative Fast-Method deconvolution for box- and disk-blurred
//! data.
//!
//! Restores 1D signals and 2D RGB images degraded by a known local-averaging
//! blur. The pieces are:
//!
//! 1. **Circle** – incremental midpoint rasterization of the sampling rings.
//! 2. **Blur** – forward degrade operators: 1D box blur, 2D disk blur.
//! 3. **Signal** – iterative ring-difference restoration in one dimension.
//! 4. **Deconv** – three-ring restoration of disk-blurred RGB images.
//!
//! The blur radius is assumed known and the iteration count is fixed by the
//! caller; all operators are sequential and deterministic.
//!
//! # Public API
//! [`Deblurrer`] and [`FastMethodConfig`] are the primary 2D entry points.
//! The operator modules are public for direct use; [`metrics`] and [`synth`]
//! support evaluation and demos.

pub mod blur;
mod bounds;
pub mod circle;
pub mod deconv;
pub mod metrics;
pub mod signal;
pub mod synth;

mod deblurrer;
mod error;

pub use circle::MAX_RADIUS;
pub use deblurrer::Deblurrer;
pub use deconv::FastMethodConfig;
pub use error::Error;
