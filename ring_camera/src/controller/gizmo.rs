/// Debug overlay description of the orbit rings.
///
/// Purely observational: the host may draw these as wire discs, nothing is
/// fed back into the controller.

use glam::Vec3;
use crate::ring::{Color, RingSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoKind {
    /// One of the three configured rings
    Configured(RingSlot),
    /// The ring resolved by the last tick
    Active,
}

/// Wire disc centred on the subject's up axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGizmo {
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
    pub color: Color,
    pub kind: GizmoKind,
}
