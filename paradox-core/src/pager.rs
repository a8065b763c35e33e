//! Page cursor for the story view.
//!
//! The pager owns the current page number and the direction hint used by
//! the slide transition. Both page-turn operations are total: turning past
//! either end of the catalog is a no-op, not an error.

use serde::{Deserialize, Serialize};

use crate::catalog::{NarrativeRecord, SensorReading, CHART_RECORD_ID, NARRATIVE_CATALOG};

/// Direction of the most recent page turn. A cosmetic hint for the slide
/// transition; nothing else reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Back,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// Signed offset multiplier for the slide transition.
    pub fn offset(&self) -> i32 {
        match self {
            Direction::Back => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

/// Current page and transition direction.
#[derive(Debug, Clone)]
pub struct Pager {
    page: u32,
    direction: Direction,
}

impl Pager {
    /// Start at the first page with no pending transition.
    pub fn new() -> Self {
        Self {
            page: 1,
            direction: Direction::Still,
        }
    }

    /// 1-based current page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Total page count.
    pub fn total(&self) -> u32 {
        NARRATIVE_CATALOG.len() as u32
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Fraction of the story reached, for the progress strip.
    pub fn progress(&self) -> f64 {
        self.page as f64 / self.total() as f64
    }

    /// Turn to the next page. No wraparound: at the last page this does
    /// nothing. Returns whether the page changed.
    pub fn advance(&mut self) -> bool {
        if self.page == self.total() {
            return false;
        }
        self.direction = Direction::Forward;
        self.page += 1;
        true
    }

    /// Turn to the previous page. At the first page this does nothing.
    /// Returns whether the page changed.
    pub fn retreat(&mut self) -> bool {
        if self.page == 1 {
            return false;
        }
        self.direction = Direction::Back;
        self.page -= 1;
        true
    }

    /// The record for the current page. Ids are contiguous and equal to
    /// position + 1, so this lookup cannot miss for a valid page.
    pub fn current(&self) -> &'static NarrativeRecord {
        &NARRATIVE_CATALOG[(self.page - 1) as usize]
    }

    pub fn at_first(&self) -> bool {
        self.page == 1
    }

    pub fn at_last(&self) -> bool {
        self.page == self.total()
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

/// What the data slot shows for a record, in priority order: the chart
/// page always gets the chart (its sensor entry only captions the figure),
/// any other record with a sensor entry gets the overlay, and the slot
/// stays empty otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPanel<'a> {
    Chart,
    Sensor(&'a SensorReading),
    Empty,
}

impl<'a> DataPanel<'a> {
    pub fn for_record(record: &'a NarrativeRecord) -> Self {
        if record.id == CHART_RECORD_ID {
            return DataPanel::Chart;
        }
        match &record.sensor {
            Some(sensor) => DataPanel::Sensor(sensor),
            None => DataPanel::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RecordKind, Theme};

    #[test]
    fn test_current_id_tracks_page() {
        let mut pager = Pager::new();
        loop {
            assert_eq!(pager.current().id, pager.page());
            if !pager.advance() {
                break;
            }
        }
    }

    #[test]
    fn test_advance_clamps_at_last_page() {
        let mut pager = Pager::new();
        while pager.advance() {}
        assert_eq!(pager.page(), pager.total());

        assert!(!pager.advance());
        assert_eq!(pager.page(), pager.total());
    }

    #[test]
    fn test_retreat_clamps_at_first_page() {
        let mut pager = Pager::new();
        assert!(!pager.retreat());
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.direction(), Direction::Still);
    }

    #[test]
    fn test_round_trip_from_interior_page() {
        let mut pager = Pager::new();
        pager.advance();
        pager.advance();
        let start = pager.page();

        assert!(pager.advance());
        assert!(pager.retreat());
        assert_eq!(pager.page(), start);
        assert_eq!(pager.direction(), Direction::Back);
    }

    #[test]
    fn test_directions_after_turns() {
        let mut pager = Pager::new();
        assert_eq!(pager.direction(), Direction::Still);
        pager.advance();
        assert_eq!(pager.direction(), Direction::Forward);
        pager.retreat();
        assert_eq!(pager.direction(), Direction::Back);
    }

    #[test]
    fn test_chart_page_gets_chart_panel() {
        let mut pager = Pager::new();
        while pager.current().id != CHART_RECORD_ID {
            assert!(pager.advance());
        }
        // The chart page carries a sensor entry, yet the chart still wins.
        assert!(pager.current().sensor.is_some());
        assert_eq!(DataPanel::for_record(pager.current()), DataPanel::Chart);
    }

    #[test]
    fn test_sensor_records_get_overlay() {
        let pager = Pager::new();
        let record = pager.current();
        assert_ne!(record.id, CHART_RECORD_ID);
        match DataPanel::for_record(record) {
            DataPanel::Sensor(sensor) => {
                assert_eq!(sensor.kind, "trajectory");
                assert_eq!(sensor.display_value(), Some("v∞ = 54.3 km/s"));
            }
            other => panic!("expected sensor overlay, got {other:?}"),
        }
    }

    #[test]
    fn test_record_without_sensor_leaves_slot_empty() {
        let record = NarrativeRecord::new(9, "appendix", "Appendix", RecordKind::Outro, Theme::Slate);
        assert_eq!(DataPanel::for_record(&record), DataPanel::Empty);
    }
}
