/// Mock Raycaster for unit tests (no world geometry required)
///
/// Answers every query with a fixed outcome and records the queries so
/// tests can assert on origin, direction and range.

use std::sync::Mutex;
use glam::Vec3;
use crate::error::{Error, Result};
use super::raycaster::{Raycaster, RayHit};

/// Outcome returned for every query
#[derive(Debug, Clone, Copy)]
pub enum MockOutcome {
    Miss,
    Hit(f32),
    Fail,
}

/// One recorded query
#[derive(Debug, Clone, Copy)]
pub struct MockQuery {
    pub origin: Vec3,
    pub direction: Vec3,
    pub max_distance: f32,
}

pub struct MockRaycaster {
    outcome: MockOutcome,
    queries: Mutex<Vec<MockQuery>>,
}

impl MockRaycaster {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn miss() -> Self {
        Self::new(MockOutcome::Miss)
    }

    pub fn hit(distance: f32) -> Self {
        Self::new(MockOutcome::Hit(distance))
    }

    pub fn failing() -> Self {
        Self::new(MockOutcome::Fail)
    }

    pub fn queries(&self) -> Vec<MockQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl Raycaster for MockRaycaster {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Result<Option<RayHit>> {
        self.queries.lock().unwrap().push(MockQuery { origin, direction, max_distance });
        match self.outcome {
            MockOutcome::Miss => Ok(None),
            MockOutcome::Hit(distance) if distance <= max_distance => Ok(Some(RayHit::new(distance))),
            MockOutcome::Hit(_) => Ok(None),
            MockOutcome::Fail => Err(Error::RaycastFailed("mock failure".to_string())),
        }
    }
}
