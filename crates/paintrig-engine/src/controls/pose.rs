use crate::error::{SceneError, finite};
use crate::math::Transform;
use crate::rig::Joint;

/// Peak joint angle of the animation oscillator, in degrees.
pub const ANIMATION_AMPLITUDE: f64 = 45.0;

/// Animated joint angle at `t` seconds: `45 * sin(t)`.
#[inline]
pub fn oscillate(t: f64) -> f32 {
    (ANIMATION_AMPLITUDE * t.sin()) as f32
}

/// Figure pose: global view rotation plus one angle per joint.
///
/// Angles are degrees. A joint with animation enabled has its angle
/// overwritten by [`Pose::advance`] every frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pose {
    /// Rotation about X applied to the whole figure.
    pub global_x: f32,
    /// Rotation about Y applied to the whole figure.
    pub global_y: f32,
    angles: [f32; 3],
    animated: [bool; 3],
}

#[inline]
fn slot(joint: Joint) -> usize {
    match joint {
        Joint::Ear => 0,
        Joint::UpperLeg => 1,
        Joint::LowerLeg => 2,
    }
}

impl Pose {
    #[inline]
    pub fn angle(&self, joint: Joint) -> f32 {
        self.angles[slot(joint)]
    }

    pub fn set_angle(&mut self, joint: Joint, degrees: f32) -> Result<(), SceneError> {
        self.angles[slot(joint)] = finite(degrees, "joint angle")?;
        Ok(())
    }

    #[inline]
    pub fn is_animated(&self, joint: Joint) -> bool {
        self.animated[slot(joint)]
    }

    #[inline]
    pub fn set_animated(&mut self, joint: Joint, on: bool) {
        self.animated[slot(joint)] = on;
    }

    /// Flips animation for `joint` and returns the new flag.
    pub fn toggle_animated(&mut self, joint: Joint) -> bool {
        let s = slot(joint);
        self.animated[s] = !self.animated[s];
        self.animated[s]
    }

    #[inline]
    pub fn any_animated(&self) -> bool {
        self.animated.iter().any(|&a| a)
    }

    /// Drives every animated joint from the elapsed time in seconds.
    ///
    /// Returns `true` if any angle was written.
    pub fn advance(&mut self, elapsed_secs: f64) -> bool {
        let angle = oscillate(elapsed_secs);
        let mut changed = false;
        for joint in Joint::ALL {
            if self.is_animated(joint) {
                self.angles[slot(joint)] = angle;
                changed = true;
            }
        }
        changed
    }

    pub fn set_global_rotation(&mut self, x: f32, y: f32) -> Result<(), SceneError> {
        let x = finite(x, "global rotation")?;
        let y = finite(y, "global rotation")?;
        self.global_x = x;
        self.global_y = y;
        Ok(())
    }

    /// View rotation applied before every part: Y first, then X.
    pub fn root_transform(&self) -> Transform {
        let mut t = Transform::new();
        t.rotate(self.global_y, 0.0, 1.0, 0.0)
            .rotate(self.global_x, 1.0, 0.0, 0.0);
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn oscillator_endpoints() {
        assert_eq!(oscillate(0.0), 0.0);
        assert_eq!(oscillate(FRAC_PI_2), 45.0);
    }

    #[test]
    fn advance_writes_only_animated_joints() {
        let mut pose = Pose::default();
        pose.set_angle(Joint::Ear, 10.0).unwrap();
        pose.set_animated(Joint::UpperLeg, true);

        let t = 1.234;
        assert!(pose.advance(t));
        assert_eq!(pose.angle(Joint::UpperLeg), (45.0 * t.sin()) as f32);
        assert_eq!(pose.angle(Joint::Ear), 10.0);
        assert_eq!(pose.angle(Joint::LowerLeg), 0.0);
    }

    #[test]
    fn advance_without_animation_is_a_no_op() {
        let mut pose = Pose::default();
        assert!(!pose.advance(3.0));
        assert_eq!(pose, Pose::default());
    }

    #[test]
    fn toggle_flips() {
        let mut pose = Pose::default();
        assert!(pose.toggle_animated(Joint::Ear));
        assert!(pose.any_animated());
        assert!(!pose.toggle_animated(Joint::Ear));
        assert!(!pose.any_animated());
    }

    #[test]
    fn non_finite_angles_are_rejected() {
        let mut pose = Pose::default();
        assert!(pose.set_angle(Joint::LowerLeg, f32::NAN).is_err());
        assert_eq!(pose.angle(Joint::LowerLeg), 0.0);
        assert!(pose.set_global_rotation(0.0, f32::INFINITY).is_err());
    }
}
