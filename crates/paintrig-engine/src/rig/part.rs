use std::collections::HashMap;

use crate::controls::Pose;
use crate::error::SceneError;
use crate::math::{Transform, TransformOp};
use crate::paint::Color;
use crate::scene::CubeShape;

/// Pose angle that drives a hinge.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Joint {
    Ear,
    UpperLeg,
    LowerLeg,
}

impl Joint {
    pub const ALL: [Joint; 3] = [Joint::Ear, Joint::UpperLeg, Joint::LowerLeg];
}

/// Rotation about `axis` by `phase * pose.angle(joint)` degrees.
///
/// `phase` lets mirrored limbs swing in opposite directions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hinge {
    pub joint: Joint,
    pub axis: [f32; 3],
    pub phase: f32,
}

/// One step of a part's pose chain.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PartOp {
    Fixed(TransformOp),
    Hinge(Hinge),
}

impl PartOp {
    fn resolve(&self, pose: &Pose) -> TransformOp {
        match *self {
            PartOp::Fixed(op) => op,
            PartOp::Hinge(h) => {
                let [x, y, z] = h.axis;
                TransformOp::rotate(h.phase * pose.angle(h.joint), x, y, z)
            }
        }
    }
}

/// Index of a part inside its [`Rig`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PartId(pub usize);

/// Description of one rigid part. Built with chained setters.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPart {
    pub name: String,
    pub parent: Option<String>,
    pub color: Color,
    pub pose: Vec<PartOp>,
    pub shape: Vec<TransformOp>,
}

impl BodyPart {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            color: Color::WHITE,
            pose: Vec::new(),
            shape: Vec::new(),
        }
    }

    pub fn parent(mut self, name: impl Into<String>) -> Self {
        self.parent = Some(name.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn translate(mut self, x: f32, y: f32, z: f32) -> Self {
        self.pose.push(PartOp::Fixed(TransformOp::translate(x, y, z)));
        self
    }

    pub fn rotate(mut self, degrees: f32, ax: f32, ay: f32, az: f32) -> Self {
        self.pose.push(PartOp::Fixed(TransformOp::rotate(degrees, ax, ay, az)));
        self
    }

    pub fn hinge(mut self, joint: Joint, axis: [f32; 3], phase: f32) -> Self {
        self.pose.push(PartOp::Hinge(Hinge { joint, axis, phase }));
        self
    }

    /// Appends a shape-only op (not inherited by children).
    pub fn shaped(mut self, op: TransformOp) -> Self {
        self.shape.push(op);
        self
    }
}

/// A part after resolution for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPart {
    pub id: PartId,
    pub name: String,
    pub color: Color,
    /// Joint frame handed to children.
    pub frame: Transform,
    /// `frame` plus the part's shape ops; the cube's model matrix.
    pub model: Transform,
}

impl ResolvedPart {
    #[inline]
    pub fn to_cube(&self) -> CubeShape {
        CubeShape::new(self.model, self.color)
    }
}

#[derive(Debug, Clone)]
struct Node {
    part: BodyPart,
    parent: Option<PartId>,
}

/// Tree of body parts, stored parents-first.
#[derive(Debug, Clone, Default)]
pub struct Rig {
    nodes: Vec<Node>,
    by_name: HashMap<String, PartId>,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `part`. Its parent, if any, must already be present.
    pub fn add(&mut self, part: BodyPart) -> Result<PartId, SceneError> {
        if self.by_name.contains_key(&part.name) {
            return Err(SceneError::DuplicatePart(part.name));
        }

        let parent = match &part.parent {
            None => None,
            Some(p) => Some(*self.by_name.get(p).ok_or_else(|| SceneError::MissingParent {
                part: part.name.clone(),
                parent: p.clone(),
            })?),
        };

        let id = PartId(self.nodes.len());
        self.by_name.insert(part.name.clone(), id);
        self.nodes.push(Node { part, parent });
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn id(&self, name: &str) -> Result<PartId, SceneError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| SceneError::UnknownPart(name.to_string()))
    }

    pub fn part(&self, id: PartId) -> Option<&BodyPart> {
        self.nodes.get(id.0).map(|n| &n.part)
    }

    pub fn parent_of(&self, id: PartId) -> Option<PartId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    /// Resolves every part for `pose`, top-down, with `root` as the frame of
    /// parentless parts.
    pub fn resolve(&self, pose: &Pose, root: &Transform) -> Vec<ResolvedPart> {
        let mut frames: Vec<Transform> = Vec::with_capacity(self.nodes.len());
        let mut out = Vec::with_capacity(self.nodes.len());

        for (i, node) in self.nodes.iter().enumerate() {
            let base = match node.parent {
                Some(p) => &frames[p.0],
                None => root,
            };

            let mut frame = Transform::copy_from(base);
            for op in &node.part.pose {
                frame.apply(op.resolve(pose));
            }

            let mut model = Transform::copy_from(&frame);
            model.apply_all(&node.part.shape);

            frames.push(frame);
            out.push(ResolvedPart {
                id: PartId(i),
                name: node.part.name.clone(),
                color: node.part.color,
                frame,
                model,
            });
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn leg_rig() -> Rig {
        let mut rig = Rig::new();
        rig.add(
            BodyPart::new("upper")
                .translate(0.15, -0.1, 0.15)
                .hinge(Joint::UpperLeg, [1.0, 0.0, 0.0], 1.0)
                .shaped(TransformOp::scale(0.05, 0.2, 0.05)),
        )
        .unwrap();
        rig.add(
            BodyPart::new("lower")
                .parent("upper")
                .translate(0.0, -0.2, 0.0)
                .hinge(Joint::LowerLeg, [1.0, 0.0, 0.0], 1.0)
                .shaped(TransformOp::scale(0.05, 0.2, 0.05))
                .shaped(TransformOp::scale(1.0, 0.5, 1.0)),
        )
        .unwrap();
        rig
    }

    #[test]
    fn lower_leg_extends_upper_leg_frame() {
        let rig = leg_rig();
        let parts = rig.resolve(&Pose::default(), &Transform::IDENTITY);
        let (upper, lower) = (&parts[0], &parts[1]);

        let offset = upper.model.rotation_only() * Vec3::new(0.0, -0.2, 0.0);
        let expected = upper.model.translation() + offset;
        assert!(lower.model.translation().abs_diff_eq(expected, 1e-6));
        assert!(lower.model.translation().abs_diff_eq(Vec3::new(0.15, -0.3, 0.15), 1e-6));
    }

    #[test]
    fn lower_leg_follows_upper_hinge() {
        let rig = leg_rig();
        let mut pose = Pose::default();
        pose.set_angle(Joint::UpperLeg, 90.0).unwrap();
        let parts = rig.resolve(&pose, &Transform::IDENTITY);

        // Rotating the hip 90 degrees about +X swings the knee from -Y to -Z.
        let knee = parts[1].frame.translation();
        assert!(knee.abs_diff_eq(Vec3::new(0.15, -0.1, -0.05), 1e-5), "{knee:?}");
    }

    #[test]
    fn shape_ops_are_not_inherited() {
        let rig = leg_rig();
        let parts = rig.resolve(&Pose::default(), &Transform::IDENTITY);
        // The lower frame carries no scale from the upper part's shape ops.
        let p = parts[1].frame.transform_point([1.0, 0.0, 0.0]);
        assert!(Vec3::from_array(p).abs_diff_eq(Vec3::new(1.15, -0.3, 0.15), 1e-6));
    }

    #[test]
    fn resolved_frames_are_snapshots() {
        let rig = leg_rig();
        let mut parts = rig.resolve(&Pose::default(), &Transform::IDENTITY);
        let lower_before = parts[1].model;
        parts[0].frame.rotate(45.0, 0.0, 0.0, 1.0);
        assert_eq!(parts[1].model, lower_before);
    }

    #[test]
    fn duplicate_and_orphan_parts_are_rejected() {
        let mut rig = leg_rig();
        assert_eq!(
            rig.add(BodyPart::new("upper")),
            Err(SceneError::DuplicatePart("upper".into()))
        );
        assert_eq!(
            rig.add(BodyPart::new("paw").parent("ankle")),
            Err(SceneError::MissingParent { part: "paw".into(), parent: "ankle".into() })
        );
        assert_eq!(rig.id("tail"), Err(SceneError::UnknownPart("tail".into())));
    }

    #[test]
    fn root_transform_applies_to_every_part() {
        let rig = leg_rig();
        let mut root = Transform::new();
        root.translate(1.0, 0.0, 0.0);
        let parts = rig.resolve(&Pose::default(), &root);
        assert!(parts[0].frame.translation().abs_diff_eq(Vec3::new(1.15, -0.1, 0.15), 1e-6));
        assert!(parts[1].frame.translation().abs_diff_eq(Vec3::new(1.15, -0.3, 0.15), 1e-6));
    }
}
