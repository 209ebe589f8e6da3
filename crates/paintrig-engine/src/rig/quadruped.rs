use crate::math::TransformOp;
use crate::paint::Color;

use super::{BodyPart, Joint, Rig};

const FUR: Color = Color::rgb(0.82, 0.76, 0.68);
const FUR_LIGHT: Color = Color::rgb(0.9, 0.85, 0.78);
const FUR_DARK: Color = Color::rgb(0.66, 0.6, 0.52);
const EAR_PINK: Color = Color::rgb(1.0, 0.72, 0.78);
const TAIL_WHITE: Color = Color::rgb(0.97, 0.97, 0.97);

const X_AXIS: [f32; 3] = [1.0, 0.0, 0.0];
const Z_AXIS: [f32; 3] = [0.0, 0.0, 1.0];

/// (name suffix, hip x, hip z, swing phase)
const LEGS: [(&str, f32, f32, f32); 4] = [
    ("front_left", 0.15, 0.15, 1.0),
    ("front_right", -0.15, 0.15, -1.0),
    ("back_left", 0.15, -0.15, -1.0),
    ("back_right", -0.15, -0.15, 1.0),
];

/// Centers a unit cube on X/Z and hangs it below the frame origin.
fn hanging() -> TransformOp {
    TransformOp::translate(-0.5, -1.0, -0.5)
}

impl Rig {
    /// Rabbit-like figure facing +Z: body, head, two ears, four two-segment
    /// legs and a tail.
    ///
    /// Ears hinge sideways on [`Joint::Ear`]; upper and lower leg segments
    /// hinge about X on [`Joint::UpperLeg`] / [`Joint::LowerLeg`], with
    /// diagonal pairs in opposite phase.
    pub fn quadruped() -> Rig {
        let mut parts = vec![
            BodyPart::new("body")
                .color(FUR)
                .shaped(TransformOp::scale(0.3, 0.25, 0.5))
                .shaped(TransformOp::translate(-0.5, -0.4, -0.5)),
            BodyPart::new("head")
                .parent("body")
                .color(FUR_LIGHT)
                .translate(0.0, 0.1, 0.25)
                .shaped(TransformOp::scale(0.2, 0.2, 0.2))
                .shaped(TransformOp::translate(-0.5, -0.25, -0.2)),
            BodyPart::new("left_ear")
                .parent("head")
                .color(EAR_PINK)
                .translate(0.05, 0.15, 0.0)
                .hinge(Joint::Ear, Z_AXIS, -1.0)
                .shaped(TransformOp::scale(0.04, 0.2, 0.03))
                .shaped(TransformOp::translate(-0.5, 0.0, -0.5)),
            BodyPart::new("right_ear")
                .parent("head")
                .color(EAR_PINK)
                .translate(-0.05, 0.15, 0.0)
                .hinge(Joint::Ear, Z_AXIS, 1.0)
                .shaped(TransformOp::scale(0.04, 0.2, 0.03))
                .shaped(TransformOp::translate(-0.5, 0.0, -0.5)),
        ];

        for (suffix, x, z, phase) in LEGS {
            let upper = format!("upper_leg_{suffix}");
            parts.push(
                BodyPart::new(upper.clone())
                    .parent("body")
                    .color(FUR)
                    .translate(x, -0.1, z)
                    .hinge(Joint::UpperLeg, X_AXIS, phase)
                    .shaped(TransformOp::scale(0.05, 0.2, 0.05))
                    .shaped(hanging()),
            );
            parts.push(
                BodyPart::new(format!("lower_leg_{suffix}"))
                    .parent(upper)
                    .color(FUR_DARK)
                    .translate(0.0, -0.2, 0.0)
                    .hinge(Joint::LowerLeg, X_AXIS, phase)
                    .shaped(TransformOp::scale(0.05, 0.2, 0.05))
                    .shaped(TransformOp::scale(1.0, 0.5, 1.0))
                    .shaped(hanging()),
            );
        }

        parts.push(
            BodyPart::new("tail")
                .parent("body")
                .color(TAIL_WHITE)
                .translate(0.0, 0.08, -0.25)
                .rotate(-30.0, 1.0, 0.0, 0.0)
                .shaped(TransformOp::scale(0.08, 0.08, 0.08))
                .shaped(TransformOp::translate(-0.5, -0.5, -1.0)),
        );

        let mut rig = Rig::new();
        for part in parts {
            // Names are unique and parents precede children by construction.
            if let Err(e) = rig.add(part) {
                log::error!("quadruped rig: {e}");
            }
        }
        rig
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::Pose;
    use crate::math::Transform;
    use glam::Vec3;

    #[test]
    fn has_every_part() {
        let rig = Rig::quadruped();
        assert_eq!(rig.len(), 13);
        for name in ["body", "head", "left_ear", "right_ear", "tail"] {
            assert!(rig.id(name).is_ok(), "{name}");
        }
        for (suffix, ..) in LEGS {
            let upper = rig.id(&format!("upper_leg_{suffix}")).unwrap();
            let lower = rig.id(&format!("lower_leg_{suffix}")).unwrap();
            assert_eq!(rig.parent_of(lower), Some(upper));
            assert_eq!(rig.parent_of(upper), Some(rig.id("body").unwrap()));
        }
    }

    #[test]
    fn diagonal_legs_swing_opposite() {
        let rig = Rig::quadruped();
        let mut pose = Pose::default();
        pose.set_angle(Joint::UpperLeg, 30.0).unwrap();
        let parts = rig.resolve(&pose, &Transform::IDENTITY);

        let knee = |name: &str| {
            let id = rig.id(name).unwrap();
            parts[id.0].frame.translation()
        };
        let fl = knee("lower_leg_front_left");
        let fr = knee("lower_leg_front_right");
        // Opposite phase mirrors the knee's Z offset around the hip.
        assert!((fl.z - 0.15).abs() > 0.05);
        assert!(((fl.z - 0.15) + (fr.z - 0.15)).abs() < 1e-6);
    }

    #[test]
    fn ears_flop_on_ear_angle() {
        let rig = Rig::quadruped();
        let id = rig.id("left_ear").unwrap();
        let rest = rig.resolve(&Pose::default(), &Transform::IDENTITY)[id.0].model;

        let mut pose = Pose::default();
        pose.set_angle(Joint::Ear, 20.0).unwrap();
        let moved = rig.resolve(&pose, &Transform::IDENTITY)[id.0].model;

        let tip = Vec3::from_array(rest.transform_point([0.5, 1.0, 0.5]));
        let tip_moved = Vec3::from_array(moved.transform_point([0.5, 1.0, 0.5]));
        assert!(tip_moved.x > tip.x);
    }
}
