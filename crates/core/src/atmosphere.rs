//! Altitude-dependent air density model.
//!
//! Coarse piecewise-constant approximation of the standard atmosphere,
//! banded at 1000 m intervals. Good enough for drag on a falling body;
//! the discontinuities at band boundaries are invisible behind the
//! quadratic drag law.

/// Air density (kg/m³) at the given altitude (m).
///
/// Piecewise constant over 11 bands anchored at multiples of 1000 m,
/// clamped to the sea-level value below 1000 m (negative altitudes
/// included) and to 0.4135 above 10000 m. Pure and total: any finite
/// altitude is valid input.
pub fn air_density(altitude: f32) -> f32 {
    if altitude >= 10000.0 {
        0.4135
    } else if altitude >= 9000.0 {
        0.4671
    } else if altitude >= 8000.0 {
        0.5258
    } else if altitude >= 7000.0 {
        0.59
    } else if altitude >= 6000.0 {
        0.6601
    } else if altitude >= 5000.0 {
        0.7364
    } else if altitude >= 4000.0 {
        0.8194
    } else if altitude >= 3000.0 {
        0.9093
    } else if altitude >= 2000.0 {
        1.0066
    } else if altitude >= 1000.0 {
        1.1117
    } else {
        1.225 // Sea level
    }
}
