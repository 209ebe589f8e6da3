use core::ops::Mul;

use glam::{Mat3, Mat4, Vec3};

/// One primitive affine operation.
///
/// Rotations are expressed in degrees about an arbitrary axis; the axis does
/// not need to be normalized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TransformOp {
    Translate(Vec3),
    Rotate { degrees: f32, axis: Vec3 },
    Scale(Vec3),
}

impl TransformOp {
    #[inline]
    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        TransformOp::Translate(Vec3::new(x, y, z))
    }

    #[inline]
    pub fn rotate(degrees: f32, ax: f32, ay: f32, az: f32) -> Self {
        TransformOp::Rotate { degrees, axis: Vec3::new(ax, ay, az) }
    }

    #[inline]
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        TransformOp::Scale(Vec3::new(x, y, z))
    }

    /// Returns the matrix for this operation.
    ///
    /// `None` when any argument is non-finite or the rotation axis has zero
    /// length; such operations are skipped by [`Transform::apply`].
    pub fn matrix(&self) -> Option<Mat4> {
        match *self {
            TransformOp::Translate(t) => t.is_finite().then(|| Mat4::from_translation(t)),
            TransformOp::Scale(s) => s.is_finite().then(|| Mat4::from_scale(s)),
            TransformOp::Rotate { degrees, axis } => {
                if !degrees.is_finite() || !axis.is_finite() {
                    return None;
                }
                let axis = axis.try_normalize()?;
                Some(Mat4::from_axis_angle(axis, degrees.to_radians()))
            }
        }
    }
}

/// Running model matrix built from a chain of [`TransformOp`]s.
///
/// `Transform` is `Copy`: cloning a parent's transform to seed a child is a
/// snapshot, and later edits to either side never reach the other.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform { matrix: Mat4::IDENTITY };

    #[inline]
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Seeds a new transform with the accumulated pose of `parent`.
    #[inline]
    pub fn copy_from(parent: &Transform) -> Self {
        *parent
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Column-major copy of the matrix, ready for a uniform upload.
    #[inline]
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.matrix.to_cols_array_2d()
    }

    /// Right-multiplies `op` onto the running matrix.
    ///
    /// Invalid operations (non-finite arguments, zero rotation axis) leave the
    /// matrix unchanged and log a warning.
    pub fn apply(&mut self, op: TransformOp) -> &mut Self {
        match op.matrix() {
            Some(m) => self.matrix *= m,
            None => log::warn!("skipping invalid transform op {op:?}"),
        }
        self
    }

    /// Applies every operation in order.
    pub fn apply_all<'a, I>(&mut self, ops: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a TransformOp>,
    {
        for op in ops {
            self.apply(*op);
        }
        self
    }

    #[inline]
    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.apply(TransformOp::translate(x, y, z))
    }

    #[inline]
    pub fn rotate(&mut self, degrees: f32, ax: f32, ay: f32, az: f32) -> &mut Self {
        self.apply(TransformOp::rotate(degrees, ax, ay, az))
    }

    #[inline]
    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.apply(TransformOp::scale(x, y, z))
    }

    /// Maps a point (w = 1) through the matrix.
    #[inline]
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        self.matrix.transform_point3(Vec3::from_array(p)).to_array()
    }

    /// Translation column.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.matrix.w_axis.truncate()
    }

    /// Upper-left 3x3 with scale divided out of each column.
    pub fn rotation_only(&self) -> Mat3 {
        let m = Mat3::from_mat4(self.matrix);
        Mat3::from_cols(
            m.x_axis.normalize_or_zero(),
            m.y_axis.normalize_or_zero(),
            m.z_axis.normalize_or_zero(),
        )
    }

    /// Element-wise comparison within `eps`.
    pub fn abs_diff_eq(&self, other: &Transform, eps: f32) -> bool {
        self.matrix.abs_diff_eq(other.matrix, eps)
    }
}

impl Mul for Transform {
    type Output = Transform;

    /// `a * b` applies `b` first, then `a`.
    #[inline]
    fn mul(self, rhs: Transform) -> Transform {
        Transform { matrix: self.matrix * rhs.matrix }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn rotate_then_scale_is_not_scale_then_rotate() {
        let mut a = Transform::new();
        a.rotate(90.0, 0.0, 0.0, 1.0).scale(2.0, 1.0, 1.0);

        let mut b = Transform::new();
        b.scale(2.0, 1.0, 1.0).rotate(90.0, 0.0, 0.0, 1.0);

        let probe = [1.0, 0.0, 0.0];
        let pa = a.transform_point(probe);
        let pb = b.transform_point(probe);
        assert!(approx(pa, [0.0, 2.0, 0.0]), "{pa:?}");
        assert!(approx(pb, [0.0, 1.0, 0.0]), "{pb:?}");
        assert!(!a.abs_diff_eq(&b, 1e-4));
    }

    #[test]
    fn last_op_applies_to_vertices_first() {
        let mut t = Transform::new();
        t.translate(1.0, 0.0, 0.0).scale(3.0, 3.0, 3.0);
        assert!(approx(t.transform_point([1.0, 1.0, 0.0]), [4.0, 3.0, 0.0]));
    }

    #[test]
    fn copy_is_a_snapshot() {
        let mut a = Transform::new();
        a.translate(0.5, 0.0, 0.0);
        let b = Transform::copy_from(&a);
        a.rotate(45.0, 0.0, 1.0, 0.0).scale(2.0, 2.0, 2.0);

        let mut expected = Transform::new();
        expected.translate(0.5, 0.0, 0.0);
        assert_eq!(b, expected);
        assert_ne!(a, b);
    }

    #[test]
    fn non_finite_ops_are_skipped() {
        let mut t = Transform::new();
        t.translate(f32::NAN, 0.0, 0.0)
            .rotate(f32::INFINITY, 1.0, 0.0, 0.0)
            .scale(1.0, f32::NEG_INFINITY, 1.0);
        assert_eq!(t, Transform::IDENTITY);
    }

    #[test]
    fn zero_axis_rotation_is_skipped() {
        let mut t = Transform::new();
        t.rotate(30.0, 0.0, 0.0, 0.0);
        assert_eq!(t, Transform::IDENTITY);
    }

    #[test]
    fn unnormalized_axis_is_normalized() {
        let mut a = Transform::new();
        a.rotate(90.0, 0.0, 0.0, 5.0);
        let mut b = Transform::new();
        b.rotate(90.0, 0.0, 0.0, 1.0);
        assert!(a.abs_diff_eq(&b, 1e-6));
    }

    #[test]
    fn rotation_only_strips_scale() {
        let mut t = Transform::new();
        t.rotate(30.0, 1.0, 0.0, 0.0).scale(0.05, 0.2, 0.05);
        let mut r = Transform::new();
        r.rotate(30.0, 1.0, 0.0, 0.0);
        assert!(t.rotation_only().abs_diff_eq(Mat3::from_mat4(r.matrix()), 1e-5));
    }

    #[test]
    fn mul_applies_rhs_first() {
        let mut a = Transform::new();
        a.translate(1.0, 0.0, 0.0);
        let mut b = Transform::new();
        b.scale(2.0, 2.0, 2.0);
        let p = (a * b).transform_point([1.0, 0.0, 0.0]);
        assert!(approx(p, [3.0, 0.0, 0.0]));
    }
}
