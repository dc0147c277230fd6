//! Fragment size classes and exclusive segment selection.

use crate::constants::{MIN_STRIP_DISTANCE, STRIP_DISTANCE_FACTOR};
use crate::geometry::LineSegmentSet;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// How many segments a fragment takes and how it picks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    /// Contiguous shard gathered around a seed segment.
    Strip,
}

impl SizeClass {
    pub const ALL: [SizeClass; 4] = [
        SizeClass::Small,
        SizeClass::Medium,
        SizeClass::Large,
        SizeClass::Strip,
    ];

    pub fn segment_range(&self) -> RangeInclusive<usize> {
        match self {
            SizeClass::Small => 5..=20,
            SizeClass::Medium => 20..=50,
            SizeClass::Large => 60..=140,
            SizeClass::Strip => 10..=30,
        }
    }

    pub fn random(rng: &mut impl Rng) -> SizeClass {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Source indices still available to fragments of one shatter.
pub struct SegmentPool<'a> {
    source: &'a LineSegmentSet,
    used: HashSet<usize>,
    strip_distance: f32,
}

impl<'a> SegmentPool<'a> {
    pub fn new(source: &'a LineSegmentSet) -> Self {
        let strip_distance =
            (source.bounding_radius() * STRIP_DISTANCE_FACTOR).max(MIN_STRIP_DISTANCE);
        Self {
            source,
            used: HashSet::new(),
            strip_distance,
        }
    }

    pub fn remaining(&self) -> usize {
        self.source.len() - self.used.len()
    }

    pub fn strip_distance(&self) -> f32 {
        self.strip_distance
    }

    /// Draws a size for `class` and takes up to that many unused indices.
    pub fn take(&mut self, class: SizeClass, rng: &mut impl Rng) -> Vec<usize> {
        let wanted = rng.gen_range(class.segment_range());
        match class {
            SizeClass::Strip => self.take_strip(wanted, rng),
            _ => self.take_scattered(wanted, rng),
        }
    }

    /// Uniformly random unused indices. Returns fewer when the pool runs dry.
    pub fn take_scattered(&mut self, count: usize, rng: &mut impl Rng) -> Vec<usize> {
        let available = self.available();
        let picked: Vec<usize> = available.choose_multiple(rng, count).copied().collect();
        self.mark_used(&picked);
        picked
    }

    /// A random seed plus its nearest unused neighbors within the strip
    /// distance, measured between segment midpoints.
    pub fn take_strip(&mut self, count: usize, rng: &mut impl Rng) -> Vec<usize> {
        if count == 0 {
            return Vec::new();
        }
        let available = self.available();
        let Some(&seed) = available.choose(rng) else {
            return Vec::new();
        };
        let seed_mid = self.source.segments()[seed].midpoint();

        let mut nearby: Vec<(usize, f32)> = available
            .iter()
            .filter(|&&i| i != seed)
            .map(|&i| (i, self.source.segments()[i].midpoint().distance(seed_mid)))
            .filter(|&(_, d)| d <= self.strip_distance)
            .collect();
        nearby.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut picked = vec![seed];
        picked.extend(nearby.into_iter().take(count - 1).map(|(i, _)| i));
        self.mark_used(&picked);
        picked
    }

    fn available(&self) -> Vec<usize> {
        (0..self.source.len())
            .filter(|i| !self.used.contains(i))
            .collect()
    }

    fn mark_used(&mut self, indices: &[usize]) {
        self.used.extend(indices.iter().copied());
    }
}
