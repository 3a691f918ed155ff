use serde::{Deserialize, Serialize};

/// One row of a derived schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulePoint {
    /// 0-based period index.
    pub period: u32,
    /// Remaining price at this period.
    pub price: f64,
    /// Cumulative revenue earned by this period.
    pub revenue: f64,
}

/// An ordered, immutable sequence of schedule points.
///
/// Points are contiguous and totally ordered by `period`, starting at 0.
/// A schedule is only ever replaced wholesale, never patched; there is no
/// mutation API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldSchedule {
    points: Vec<SchedulePoint>,
}

impl YieldSchedule {
    /// Only the derivation engine constructs schedules.
    pub(crate) fn new(points: Vec<SchedulePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[SchedulePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchedulePoint> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&SchedulePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SchedulePoint> {
        self.points.last()
    }
}

impl<'a> IntoIterator for &'a YieldSchedule {
    type Item = &'a SchedulePoint;
    type IntoIter = std::slice::Iter<'a, SchedulePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
