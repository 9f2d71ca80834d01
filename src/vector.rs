/*
 * Vector Module
 *
 * 3D vector helpers for the simulation core. The component type is glam's
 * `DVec3`; this module adds the steering-specific operations on top of it:
 * zero-safe normalization, length clamping and rescaling.
 */

pub use glam::DVec3;

// All simulation state is kept in double precision
pub type Vector3 = DVec3;

// Unit vector in the direction of `v`, or zero for a zero-length (or non-finite) input
#[inline]
pub fn normalize(v: Vector3) -> Vector3 {
    v.normalize_or_zero()
}

// Clamp the length of `v` to at most `max`.
// A non-positive `max` collapses the vector to zero.
#[inline]
pub fn limit(v: Vector3, max: f64) -> Vector3 {
    if max <= 0.0 {
        return Vector3::ZERO;
    }
    v.clamp_length_max(max)
}

// Rescale `v` to the given length, keeping its direction
#[inline]
pub fn set_magnitude(v: Vector3, magnitude: f64) -> Vector3 {
    normalize(v) * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(normalize(Vector3::ZERO), Vector3::ZERO);
    }

    #[test]
    fn normalize_produces_unit_length() {
        let n = normalize(Vector3::new(3.0, 4.0, 12.0));
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn limit_leaves_short_vectors_alone() {
        let v = Vector3::new(0.01, 0.02, 0.0);
        assert_eq!(limit(v, 1.0), v);
    }

    #[test]
    fn limit_shortens_long_vectors() {
        let v = limit(Vector3::new(0.0, 0.0, 10.0), 2.0);
        assert!((v.z - 2.0).abs() < 1e-12);
        assert_eq!(v.x, 0.0);
    }

    #[test]
    fn limit_with_non_positive_max_is_zero() {
        assert_eq!(limit(Vector3::new(1.0, 1.0, 1.0), 0.0), Vector3::ZERO);
        assert_eq!(limit(Vector3::new(1.0, 1.0, 1.0), -3.0), Vector3::ZERO);
    }

    #[test]
    fn set_magnitude_keeps_direction() {
        let v = set_magnitude(Vector3::new(0.0, -5.0, 0.0), 2.0);
        assert!((v - Vector3::new(0.0, -2.0, 0.0)).length() < 1e-12);
        assert_eq!(set_magnitude(Vector3::ZERO, 2.0), Vector3::ZERO);
    }
}
