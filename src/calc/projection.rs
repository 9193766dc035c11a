use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_VOLUME: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub volume: u64,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
}

/// Revenue, cost and profit scaled linearly over volumes 1..=max_volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub revenue_per_sample: f64,
    pub cost_per_sample: f64,
    pub max_volume: u64,
}

impl Projection {
    pub fn new(revenue_per_sample: f64, cost_per_sample: f64) -> Self {
        Self {
            revenue_per_sample,
            cost_per_sample,
            max_volume: DEFAULT_MAX_VOLUME,
        }
    }

    pub fn with_max_volume(mut self, max_volume: u64) -> Self {
        self.max_volume = max_volume;
        self
    }

    /// Each call starts a fresh pass from volume 1.
    pub fn iter(&self) -> ProjectionIter {
        ProjectionIter {
            projection: *self,
            next_volume: 1,
            remaining: self.max_volume,
        }
    }

    pub fn point(&self, volume: u64) -> ProjectionPoint {
        let v = volume as f64;
        let revenue = self.revenue_per_sample * v;
        let cost = self.cost_per_sample * v;
        ProjectionPoint {
            volume,
            revenue,
            cost,
            profit: revenue - cost,
        }
    }
}

impl IntoIterator for &Projection {
    type Item = ProjectionPoint;
    type IntoIter = ProjectionIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct ProjectionIter {
    projection: Projection,
    next_volume: u64,
    remaining: u64,
}

impl Iterator for ProjectionIter {
    type Item = ProjectionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let point = self.projection.point(self.next_volume);
        self.remaining -= 1;
        self.next_volume = self.next_volume.saturating_add(1);
        Some(point)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = u64::try_from(n).unwrap_or(u64::MAX).min(self.remaining);
        self.remaining -= skip;
        self.next_volume = self.next_volume.saturating_add(skip);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for ProjectionIter {}
