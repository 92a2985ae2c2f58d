//! Signed distance functions for the primitive palette
//!
//! All shapes are centred on the origin. Negative distance means inside.

use glam::Vec2;

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Signed distance to an axis-aligned box with the given half extents
pub fn sd_box(p: Vec2, half_extents: Vec2) -> f32 {
    let d = p.abs() - half_extents;
    d.max(Vec2::ZERO).length() + d.x.max(d.y).min(0.0)
}

/// Signed distance to an equilateral triangle pointing up
///
/// `half_side` is half the side length; the centroid sits at the origin.
pub fn sd_equilateral_triangle(p: Vec2, half_side: f32) -> f32 {
    let k = 3.0_f32.sqrt();
    let mut q = Vec2::new(p.x.abs() - half_side, p.y + half_side / k);
    if q.x + k * q.y > 0.0 {
        q = Vec2::new(q.x - k * q.y, -k * q.x - q.y) / 2.0;
    }
    q.x -= q.x.clamp(-2.0 * half_side, 0.0);
    -q.length() * q.y.signum()
}

/// Signed distance to a regular hexagon with flat top and bottom edges
///
/// `inradius` is the distance from the centre to each edge.
pub fn sd_hexagon(p: Vec2, inradius: f32) -> f32 {
    const K: [f32; 3] = [-0.866_025_4, 0.5, 0.577_350_3];
    let kxy = Vec2::new(K[0], K[1]);
    let mut q = p.abs();
    q -= 2.0 * kxy.dot(q).min(0.0) * kxy;
    q -= Vec2::new(q.x.clamp(-K[2] * inradius, K[2] * inradius), inradius);
    q.length() * q.y.signum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sd_circle() {
        assert!(sd_circle(Vec2::ZERO, Vec2::ZERO, 1.0) < 0.0);
        assert!((sd_circle(Vec2::new(2.0, 0.0), Vec2::ZERO, 1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sd_box() {
        let half = Vec2::splat(0.5);
        assert!((sd_box(Vec2::ZERO, half) + 0.5).abs() < 1e-6);
        assert!((sd_box(Vec2::new(1.0, 0.0), half) - 0.5).abs() < 1e-6);
        // Corner distance is diagonal
        let d = sd_box(Vec2::new(1.5, 1.5), half);
        assert!((d - 2.0_f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_sd_triangle() {
        let half_side = 0.5;
        assert!(sd_equilateral_triangle(Vec2::ZERO, half_side) < 0.0);
        // Apex is at 2/3 of the height above the centroid
        let height = 3.0_f32.sqrt() * half_side;
        assert!(sd_equilateral_triangle(Vec2::new(0.0, height * 0.6), half_side) < 0.0);
        assert!(sd_equilateral_triangle(Vec2::new(0.0, height * 0.7), half_side) > 0.0);
        // Below the base
        assert!(sd_equilateral_triangle(Vec2::new(0.0, -height * 0.4), half_side) > 0.0);
        // Beside the narrow top
        assert!(sd_equilateral_triangle(Vec2::new(0.4, 0.2), half_side) > 0.0);
    }

    #[test]
    fn test_sd_hexagon() {
        let r = 0.4;
        assert!(sd_hexagon(Vec2::ZERO, r) < 0.0);
        assert!((sd_hexagon(Vec2::new(0.0, 0.5), r) - 0.1).abs() < 1e-5);
        assert!(sd_hexagon(Vec2::new(0.0, 0.35), r) < 0.0);
        // Circumradius along x is r / cos(30°)
        let circum = r / (3.0_f32.sqrt() / 2.0);
        assert!(sd_hexagon(Vec2::new(circum * 0.95, 0.0), r) < 0.0);
        assert!(sd_hexagon(Vec2::new(circum * 1.05, 0.0), r) > 0.0);
    }
}
