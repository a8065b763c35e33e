//! Content catalog and presentation state for the 3I/ATLAS Paradox story.
//!
//! This crate provides:
//! - The compiled-in story content: narrative records, the intro sequence,
//!   and the acceleration chart data
//! - The pager: a clamped page cursor with a transition-direction hint
//! - The intro player: a cyclic playback cursor gating entry to the story
//! - The hero-art asset policy with its one-shot fallback
//!
//! # Quick Start
//!
//! ```
//! use paradox_core::{DataPanel, Pager};
//!
//! let mut pager = Pager::new();
//! while pager.advance() {}
//!
//! let last = pager.current();
//! assert_eq!(last.slug, "conclusion");
//! assert_eq!(last.id, pager.total());
//!
//! match DataPanel::for_record(last) {
//!     DataPanel::Sensor(sensor) => println!("{}", sensor.kind),
//!     _ => unreachable!(),
//! }
//! ```

pub mod assets;
pub mod catalog;
pub mod intro;
pub mod pager;

// Primary public API
pub use assets::{AssetError, HeroArt};
pub use catalog::{
    ChartPoint, IntroRecord, NarrativeRecord, RecordKind, SensorPayload, SensorReading, Theme,
    CHART_RECORD_ID, INTRO_SEQUENCE, NARRATIVE_CATALOG, PARADOX_DATA,
};
pub use intro::IntroPlayer;
pub use pager::{DataPanel, Direction, Pager};
