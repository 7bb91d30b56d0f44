//! 2D affine transforms

use crate::geometry::Point;

/// Convert an angle in radians to degrees
pub fn radians_to_degrees(rad: f32) -> f32 {
    180.0 * rad / std::f32::consts::PI
}

/// 2D affine transform
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: x,
            f: y,
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            b: 0.0,
            c: 0.0,
            d: sy,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Rotation by `degrees`, clockwise on a y-down screen.
    ///
    /// Quarter turns produce exact matrices.
    pub fn rotate(degrees: f32) -> Self {
        let (sin, cos) = match degrees.rem_euclid(360.0) {
            r if r == 0.0 => (0.0, 1.0),
            r if r == 90.0 => (1.0, 0.0),
            r if r == 180.0 => (0.0, -1.0),
            r if r == 270.0 => (-1.0, 0.0),
            _ => degrees.to_radians().sin_cos(),
        };
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// `self * local`: `local` applies first, in the coordinate space set
    /// up by `self`.
    pub fn pre_concat(self, local: Transform2D) -> Self {
        Self {
            a: self.a * local.a + self.c * local.b,
            b: self.b * local.a + self.d * local.b,
            c: self.a * local.c + self.c * local.d,
            d: self.b * local.c + self.d * local.d,
            e: self.a * local.e + self.c * local.f + self.e,
            f: self.b * local.e + self.d * local.f + self.f,
        }
    }

    pub fn pre_translate(self, x: f32, y: f32) -> Self {
        self.pre_concat(Self::translate(x, y))
    }

    pub fn pre_scale(self, sx: f32, sy: f32) -> Self {
        self.pre_concat(Self::scale(sx, sy))
    }

    pub fn pre_rotate(self, degrees: f32) -> Self {
        self.pre_concat(Self::rotate(degrees))
    }

    pub fn map_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(p: Point, x: f32, y: f32) -> bool {
        (p.x - x).abs() < 1e-4 && (p.y - y).abs() < 1e-4
    }

    #[test]
    fn quarter_turn_is_exact_and_clockwise() {
        let t = Transform2D::rotate(90.0);
        assert_eq!(t.map_point(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
        assert_eq!(t.map_point(Point::new(0.0, 1.0)), Point::new(-1.0, 0.0));
        assert_eq!(Transform2D::rotate(-90.0), Transform2D::rotate(270.0));
    }

    #[test]
    fn pre_concat_applies_local_first() {
        // translate then rotate: rotate happens in the translated space
        let t = Transform2D::identity()
            .pre_translate(10.0, 20.0)
            .pre_rotate(90.0);
        assert!(close(t.map_point(Point::new(5.0, 0.0)), 10.0, 25.0));

        let s = Transform2D::identity()
            .pre_scale(2.0, 3.0)
            .pre_translate(1.0, 1.0);
        assert!(close(s.map_point(Point::ZERO), 2.0, 3.0));
    }

    #[test]
    fn arbitrary_angle_rotation() {
        let t = Transform2D::rotate(45.0);
        let p = t.map_point(Point::new(1.0, 0.0));
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!(close(p, h, h));
    }

    #[test]
    fn radians_convert_to_degrees() {
        assert!((radians_to_degrees(std::f32::consts::PI) - 180.0).abs() < 1e-4);
        assert!((radians_to_degrees(std::f32::consts::FRAC_PI_2) - 90.0).abs() < 1e-4);
    }
}
