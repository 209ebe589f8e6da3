use crate::coords::Vec2;
use crate::paint::{Channel, Color};
use crate::rig::Joint;
use crate::scene::ShapeKind;

use super::SceneMode;

/// A discrete user action, already translated out of platform events.
///
/// Raw slider values are carried as-is; [`SceneContext::apply`] owns the
/// mapping to state.
///
/// [`SceneContext::apply`]: super::SceneContext::apply
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Shape-kind button.
    SelectKind(ShapeKind),
    /// Color preset button.
    SetColor(Color),
    /// Color slider, `raw` in `0..=100`.
    SetChannel { channel: Channel, raw: i32 },
    /// Alpha slider, `[0, 1]`.
    SetAlpha(f32),
    /// Size slider.
    SetSize(f32),
    /// Side-count slider.
    SetSides(i64),
    /// Clear button: empties the registry.
    Clear,
    /// Mode/picture buttons.
    SetMode(SceneMode),
    /// Pointer press or drag with the primary button, in NDC.
    Place(Vec2),
    /// Joint angle slider, degrees.
    SetJointAngle { joint: Joint, degrees: f32 },
    /// Animation on/off button for one joint.
    ToggleAnimation(Joint),
    /// Explicit animation state for one joint.
    SetAnimation { joint: Joint, on: bool },
    /// Global view rotation, degrees.
    SetGlobalRotation { x: f32, y: f32 },
}
