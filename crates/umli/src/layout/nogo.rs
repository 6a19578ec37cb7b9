//! Vertical space claimed by interactions.
//!
//! An interaction between two lifelines draws its label and line across
//! every lifeline that sits between them. Those lifelines must leave a gap
//! in their dashed stroke for the claimed span, so each claim is recorded
//! here and consulted by the finalizer.

use log::trace;

use umli_core::geometry::Segment;

use super::LifelineId;

/// A span of Y claimed between two lifelines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoGoZone {
    pub segment: Segment,
    pub lifeline_a: LifelineId,
    pub lifeline_b: LifelineId,
}

impl NoGoZone {
    /// True if `lifeline` lies strictly between the zone's two lifelines.
    pub fn affects(&self, lifeline: LifelineId) -> bool {
        let lo = self.lifeline_a.min(self.lifeline_b);
        let hi = self.lifeline_a.max(self.lifeline_b);
        lo < lifeline && lifeline < hi
    }
}

#[derive(Debug, Clone, Default)]
pub struct NoGoZones {
    zones: Vec<NoGoZone>,
}

impl NoGoZones {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `[y_start, y_end]` is used between `a` and `b`.
    ///
    /// Empty or inverted spans are not recorded.
    pub fn register_space_claim(&mut self, a: LifelineId, b: LifelineId, y_start: f32, y_end: f32) {
        if y_start >= y_end {
            trace!(y_start, y_end; "Skipping empty space claim");
            return;
        }
        self.zones.push(NoGoZone {
            segment: Segment::new(y_start, y_end),
            lifeline_a: a,
            lifeline_b: b,
        });
    }

    pub fn zones(&self) -> &[NoGoZone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// The segments of every zone that `lifeline` must keep clear of.
    pub fn affecting(&self, lifeline: LifelineId) -> impl Iterator<Item = Segment> + '_ {
        self.zones
            .iter()
            .filter(move |zone| zone.affects(lifeline))
            .map(|zone| zone.segment)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn id(index: usize) -> LifelineId {
        LifelineId::new(index)
    }

    #[test]
    fn test_only_lifelines_strictly_between_are_affected() {
        let mut zones = NoGoZones::new();
        zones.register_space_claim(id(3), id(1), 10.0, 20.0);
        let zone = zones.zones()[0];

        assert!(!zone.affects(id(0)));
        assert!(!zone.affects(id(1)));
        assert!(zone.affects(id(2)));
        assert!(!zone.affects(id(3)));
        assert!(!zone.affects(id(4)));
    }

    #[test]
    fn test_neighbours_affect_nobody() {
        let mut zones = NoGoZones::new();
        zones.register_space_claim(id(0), id(1), 10.0, 20.0);

        assert_eq!(zones.len(), 1);
        assert_eq!(zones.affecting(id(0)).count(), 0);
        assert_eq!(zones.affecting(id(1)).count(), 0);
    }

    #[test]
    fn test_empty_claims_are_dropped() {
        let mut zones = NoGoZones::new();
        zones.register_space_claim(id(0), id(2), 20.0, 20.0);
        zones.register_space_claim(id(0), id(2), 30.0, 20.0);
        assert_eq!(zones.len(), 0);
    }

    #[test]
    fn test_affecting_returns_segments_in_registration_order() {
        let mut zones = NoGoZones::new();
        zones.register_space_claim(id(0), id(2), 50.0, 60.0);
        zones.register_space_claim(id(0), id(1), 70.0, 80.0);
        zones.register_space_claim(id(2), id(0), 10.0, 15.0);

        let segments: Vec<Segment> = zones.affecting(id(1)).collect();
        assert_eq!(segments, vec![Segment::new(50.0, 60.0), Segment::new(10.0, 15.0)]);
    }

    /// A zone affects a lifeline exactly when its index lies strictly
    /// between the zone's two ends, whichever order they are given in.
    fn check_betweenness(a: usize, b: usize, lifeline: usize) -> Result<(), TestCaseError> {
        let mut zones = NoGoZones::new();
        zones.register_space_claim(id(a), id(b), 0.0, 1.0);
        let expected = a.min(b) < lifeline && lifeline < a.max(b);
        prop_assert_eq!(zones.zones()[0].affects(id(lifeline)), expected);
        Ok(())
    }

    proptest! {
        #[test]
        fn betweenness(a in 0usize..26, b in 0usize..26, lifeline in 0usize..26) {
            check_betweenness(a, b, lifeline)?;
        }
    }
}
