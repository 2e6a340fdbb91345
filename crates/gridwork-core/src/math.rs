/// Vector math backed by the SIMD-accelerated `glam` crate.
///
/// Pointer coordinates, ghost positions and sizes are all carried as
/// [`Vec2`] values in CSS pixels.
///
/// # Examples
///
/// ```
/// use gridwork_core::math::Vec2;
///
/// let pointer = Vec2::new(120.0, 48.0);
/// let origin = Vec2::new(100.0, 40.0);
/// assert_eq!(pointer - origin, Vec2::new(20.0, 8.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
