//! Float helpers that stay available without `std`.

#[cfg(feature = "std")]
pub(crate) fn round(v: f32) -> f32 {
    v.round()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn round(v: f32) -> f32 {
    libm::roundf(v)
}

#[cfg(feature = "std")]
pub(crate) fn abs(v: f32) -> f32 {
    v.abs()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn abs(v: f32) -> f32 {
    libm::fabsf(v)
}
