/// RingSet - the three configured rings, validated as a unit.

use crate::error::Result;
use crate::rig_bail;
use super::color::Color;
use super::ring_profile::RingProfile;
use super::ring_selector::{ring_regime, select_ring, RingRegime};

/// Position of a ring within the set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingSlot {
    Top,
    Middle,
    Bottom,
}

impl RingSlot {
    /// Lower-case name used in messages
    pub fn name(self) -> &'static str {
        match self {
            RingSlot::Top => "top",
            RingSlot::Middle => "middle",
            RingSlot::Bottom => "bottom",
        }
    }
}

/// Top, middle and bottom rings with `top.height >= middle.height >= bottom.height`.
///
/// The ordering is checked by `new`; the fields are private so a built set
/// cannot drift out of order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSet {
    top: RingProfile,
    middle: RingProfile,
    bottom: RingProfile,
}

impl Default for RingSet {
    /// Tall narrow top, wide middle, small ring under the subject
    fn default() -> Self {
        Self {
            top: RingProfile::new(2.0, 3.0, Color::RED),
            middle: RingProfile::new(5.0, 1.4, Color::GREEN),
            bottom: RingProfile::new(1.0, -1.0, Color::BLUE),
        }
    }
}

impl RingSet {
    /// Build a set, rejecting invalid rings and mis-ordered heights.
    pub fn new(top: RingProfile, middle: RingProfile, bottom: RingProfile) -> Result<Self> {
        let set = Self { top, middle, bottom };
        set.validate()?;
        Ok(set)
    }

    /// Re-run the checks performed by `new`.
    pub fn validate(&self) -> Result<()> {
        for (slot, ring) in self.iter() {
            ring.validate(slot.name())?;
        }
        if self.top.height < self.middle.height {
            rig_bail!("ringcam::Ring", InvalidConfig,
                "top ring height {} is below middle ring height {}",
                self.top.height, self.middle.height);
        }
        if self.middle.height < self.bottom.height {
            rig_bail!("ringcam::Ring", InvalidConfig,
                "middle ring height {} is below bottom ring height {}",
                self.middle.height, self.bottom.height);
        }
        Ok(())
    }

    pub fn top(&self) -> &RingProfile {
        &self.top
    }

    pub fn middle(&self) -> &RingProfile {
        &self.middle
    }

    pub fn bottom(&self) -> &RingProfile {
        &self.bottom
    }

    /// Ring stored in `slot`
    pub fn get(&self, slot: RingSlot) -> &RingProfile {
        match slot {
            RingSlot::Top => &self.top,
            RingSlot::Middle => &self.middle,
            RingSlot::Bottom => &self.bottom,
        }
    }

    /// Rings in top → bottom order
    pub fn iter(&self) -> impl Iterator<Item = (RingSlot, &RingProfile)> + '_ {
        [RingSlot::Top, RingSlot::Middle, RingSlot::Bottom]
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }

    /// Which piece of the profile `reference_height` falls in
    pub fn regime(&self, reference_height: f32) -> RingRegime {
        ring_regime(reference_height, &self.top, &self.middle, &self.bottom)
    }

    /// Resolve the active ring for `reference_height`
    pub fn select(&self, reference_height: f32) -> RingProfile {
        select_ring(reference_height, &self.top, &self.middle, &self.bottom)
    }
}

#[cfg(test)]
#[path = "ring_set_tests.rs"]
mod tests;
