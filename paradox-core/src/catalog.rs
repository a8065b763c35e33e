//! Story content: narrative records, the intro sequence, and chart data.
//!
//! Everything here is compiled in and immutable. The narrative catalog is an
//! ordered sequence where a record's `id` always equals its array position
//! plus one; the pager leans on that equivalence for page lookup, so the
//! catalog constructor is the only place records are assembled.

use serde::{Deserialize, Serialize};

/// Record id of the page that embeds the acceleration chart. That page
/// always shows the chart panel, even though it also carries a sensor entry
/// (the entry's label captions the figure).
pub const CHART_RECORD_ID: u32 = 5;

// ============================================================================
// Themes
// ============================================================================

/// Accent theme for a page. A closed set: the renderer maps each tag to a
/// concrete terminal color, so a new theme is a compile-time change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Emerald,
    Cyan,
    Violet,
    Amber,
    Rose,
    Blue,
    Slate,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Emerald,
            Theme::Cyan,
            Theme::Violet,
            Theme::Amber,
            Theme::Rose,
            Theme::Blue,
            Theme::Slate,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Emerald => "emerald",
            Theme::Cyan => "cyan",
            Theme::Violet => "violet",
            Theme::Amber => "amber",
            Theme::Rose => "rose",
            Theme::Blue => "blue",
            Theme::Slate => "slate",
        }
    }
}

// ============================================================================
// Record kinds
// ============================================================================

/// Narrative role of a record. Display-only: shown as a tag chip on the
/// page panel, never branched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Intro,
    Discovery,
    Analysis,
    Conflict,
    DataHeavy,
    Reflection,
    Choice,
    Outro,
}

impl RecordKind {
    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Intro => "intro",
            RecordKind::Discovery => "discovery",
            RecordKind::Analysis => "analysis",
            RecordKind::Conflict => "conflict",
            RecordKind::DataHeavy => "data-heavy",
            RecordKind::Reflection => "reflection",
            RecordKind::Choice => "choice",
            RecordKind::Outro => "outro",
        }
    }
}

// ============================================================================
// Sensor readings
// ============================================================================

/// What a sensor entry displays: a headline measurement shown in the
/// sensor overlay, or a caption for an embedded figure. Mutually exclusive
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorPayload {
    Value(String),
    Label(String),
}

/// Scientific data attached to a narrative record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Category tag ("trajectory", "composition", ...).
    pub kind: String,
    pub payload: SensorPayload,
}

impl SensorReading {
    pub fn value(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: SensorPayload::Value(value.into()),
        }
    }

    pub fn label(kind: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: SensorPayload::Label(label.into()),
        }
    }

    /// The headline measurement, if this reading carries one.
    pub fn display_value(&self) -> Option<&str> {
        match &self.payload {
            SensorPayload::Value(v) => Some(v),
            SensorPayload::Label(_) => None,
        }
    }

    /// The figure caption, if this reading carries one.
    pub fn display_label(&self) -> Option<&str> {
        match &self.payload {
            SensorPayload::Label(l) => Some(l),
            SensorPayload::Value(_) => None,
        }
    }
}

// ============================================================================
// Narrative records
// ============================================================================

/// One page of the story.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeRecord {
    /// 1-based, contiguous; equals array position + 1.
    pub id: u32,
    /// Short identifier used as a display label.
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub narrative: String,
    pub kind: RecordKind,
    pub sensor: Option<SensorReading>,
    pub theme: Theme,
}

impl NarrativeRecord {
    pub fn new(
        id: u32,
        slug: impl Into<String>,
        title: impl Into<String>,
        kind: RecordKind,
        theme: Theme,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            title: title.into(),
            subtitle: String::new(),
            narrative: String::new(),
            kind,
            sensor: None,
            theme,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = narrative.into();
        self
    }

    pub fn with_sensor(mut self, sensor: SensorReading) -> Self {
        self.sensor = Some(sensor);
        self
    }
}

// ============================================================================
// Intro sequence
// ============================================================================

/// One entry of the gating intro sequence. `src` is a media path resolved
/// by whatever serves the assets; the player only carries it as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntroRecord {
    pub id: u32,
    pub src: String,
    pub label: String,
    pub quote: String,
    /// Simulated playback length, in event-loop ticks.
    pub duration_ticks: u32,
}

impl IntroRecord {
    pub fn new(
        id: u32,
        src: impl Into<String>,
        label: impl Into<String>,
        quote: impl Into<String>,
    ) -> Self {
        Self {
            id,
            src: src.into(),
            label: label.into(),
            quote: quote.into(),
            duration_ticks: 80,
        }
    }
}

// ============================================================================
// Chart data
// ============================================================================

/// One sample of the acceleration figure: observed and model-predicted
/// non-gravitational acceleration, with the model's uncertainty band.
/// Magnitudes are in units of 10⁻⁶ m/s².
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartPoint {
    pub time: &'static str,
    pub observed: f64,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

// ============================================================================
// Compiled-in content
// ============================================================================

lazy_static::lazy_static! {
    /// The story, in display order.
    pub static ref NARRATIVE_CATALOG: Vec<NarrativeRecord> = vec![
        NarrativeRecord::new(1, "discovery", "3I/ATLAS Discovery", RecordKind::Intro, Theme::Emerald)
            .with_subtitle("MPC Circular 2025-07-01")
            .with_narrative(
                "The interstellar object 3I/ATLAS was discovered on July 1st, 2025. \
                 Heliocentric excess velocity: 54.3 ± 2.1 km/s. Perihelion: 1.36 ± 0.05 AU. \
                 This is not 'Oumuamua. This is something else entirely.",
            )
            .with_sensor(SensorReading::value("trajectory", "v∞ = 54.3 km/s")),
        NarrativeRecord::new(2, "spectroscopy", "Spectroscopic Anomalies", RecordKind::Discovery, Theme::Cyan)
            .with_subtitle("JWST/NIRSpec + VLT/X-SHOOTER")
            .with_narrative(
                "CO₂-dominated composition. But the metal enrichment is extreme, with Ni/Fe \
                 ratios at 6.8, far above solar. And the CN/CO₂ ratio? 432. That shouldn't \
                 be possible in a natural comet.",
            )
            .with_sensor(SensorReading::value("composition", "CO₂/H₂O = 8.2 ± 0.5")),
        NarrativeRecord::new(3, "jets", "Collimated Jet Structure", RecordKind::Analysis, Theme::Violet)
            .with_subtitle("VLT/SPHERE Imaging")
            .with_narrative(
                "The jets aren't diffuse like normal cometary outgassing. They're collimated, \
                 with a 28° divergence angle. Like they're coming from engineered cavities. \
                 Or nozzles.",
            )
            .with_sensor(SensorReading::value("geometry", "Jet FWHM = 28.0° ± 8°")),
        NarrativeRecord::new(4, "rotation", "Rotational Dynamics", RecordKind::Conflict, Theme::Amber)
            .with_subtitle("Photometric Period Analysis")
            .with_narrative(
                "It tumbles every 15.7 hours. Perfectly periodic. No damping. No precession. \
                 Either it's a rigid body with extreme moment-of-inertia symmetry, or \
                 something is actively stabilizing it.",
            )
            .with_sensor(SensorReading::value("dynamics", "P = 15.7 ± 0.4 h")),
        NarrativeRecord::new(5, "acceleration", "The Acceleration Paradox", RecordKind::DataHeavy, Theme::Rose)
            .with_subtitle("Non-Gravitational Force Analysis")
            .with_narrative(
                "Measured acceleration: 2.3 × 10⁻⁶ m/s². Standard sublimation models predict \
                 10⁻⁸ to 10⁻⁵. We're at the upper edge, or beyond. The momentum transfer \
                 doesn't match the observed outgassing.",
            )
            .with_sensor(SensorReading::label("chart", "Acceleration: Observed vs Predicted")),
        NarrativeRecord::new(6, "bayesian", "Bayesian Hypothesis Testing", RecordKind::Reflection, Theme::Emerald)
            .with_subtitle("H_N vs H_A Comparison")
            .with_narrative(
                "We ran the numbers. Bayes factor of 2-4 favoring active control over passive \
                 sublimation. But the posterior depends entirely on your prior. If you assume \
                 artifacts are rare, the probability is 10⁻¹⁶. If you assume 10% of \
                 interstellar objects are artificial? 25%.",
            )
            .with_sensor(SensorReading::value("statistics", "BF(A/N) ≈ 2-4")),
        NarrativeRecord::new(7, "observational-program", "Three-Phase Protocol", RecordKind::Choice, Theme::Blue)
            .with_subtitle("Discrimination Strategy")
            .with_narrative(
                "We need more data. Phase 1: Spectroscopic monitoring over 12 weeks. Phase 2: \
                 Precision photometry for 24 weeks. Phase 3: High-resolution imaging. If \
                 these don't resolve it, we recommend sample return.",
            )
            .with_sensor(SensorReading::value("timeline", "Launch Window: 2027")),
        NarrativeRecord::new(8, "conclusion", "The Question Remains Open", RecordKind::Outro, Theme::Slate)
            .with_subtitle("Investigation Status: Active")
            .with_narrative(
                "We don't know what 3I/ATLAS is. Natural cometesimal from a CO₂-rich disk? \
                 Differentiated planetesimal fragment? Or something designed? The answer \
                 isn't in speculation. It's in observation. The data is yours now.",
            )
            .with_sensor(SensorReading::value("status", "Sampling Justified")),
    ];

    /// The gating intro sequence. Non-empty; playback cycles through it
    /// until the viewer enters the experience.
    pub static ref INTRO_SEQUENCE: Vec<IntroRecord> = vec![
        IntroRecord::new(
            1,
            "/avra1.mp4",
            "Profile: Avra (A'uwẽ Uptabi)",
            "Come with me on this adventure.",
        ),
        IntroRecord::new(
            2,
            "/avra2.mp4",
            "Subject: 3i Atlas",
            "An arrival that changed everything.",
        ),
    ];
}

/// Samples for the acceleration figure on the chart page. Fixed data, not
/// derived from any record's sensor entry.
pub const PARADOX_DATA: [ChartPoint; 5] = [
    ChartPoint { time: "Pre-perihelion", observed: 1.2, predicted: 0.8, lower: 0.3, upper: 1.5 },
    ChartPoint { time: "Approach", observed: 1.8, predicted: 1.2, lower: 0.5, upper: 2.0 },
    ChartPoint { time: "Perihelion", observed: 2.3, predicted: 1.5, lower: 0.8, upper: 2.5 },
    ChartPoint { time: "Post-perihelion", observed: 2.1, predicted: 1.3, lower: 0.6, upper: 2.2 },
    ChartPoint { time: "Exit", observed: 1.5, predicted: 0.9, lower: 0.4, upper: 1.8 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_positions() {
        for (index, record) in NARRATIVE_CATALOG.iter().enumerate() {
            assert_eq!(record.id as usize, index + 1);
        }
    }

    #[test]
    fn test_slugs_unique() {
        let mut slugs: Vec<&str> = NARRATIVE_CATALOG.iter().map(|r| r.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), NARRATIVE_CATALOG.len());
    }

    #[test]
    fn test_chart_record_carries_label() {
        let record = &NARRATIVE_CATALOG[(CHART_RECORD_ID - 1) as usize];
        let sensor = record.sensor.as_ref().unwrap();
        assert_eq!(sensor.display_value(), None);
        assert_eq!(
            sensor.display_label(),
            Some("Acceleration: Observed vs Predicted")
        );
    }

    #[test]
    fn test_non_chart_records_carry_values() {
        for record in NARRATIVE_CATALOG.iter().filter(|r| r.id != CHART_RECORD_ID) {
            let sensor = record.sensor.as_ref().unwrap();
            assert!(sensor.display_value().is_some(), "record {}", record.slug);
        }
    }

    #[test]
    fn test_intro_sequence_non_empty() {
        assert!(!INTRO_SEQUENCE.is_empty());
        assert!(INTRO_SEQUENCE.iter().all(|r| r.duration_ticks > 0));
    }

    #[test]
    fn test_catalog_round_trips_through_json() {
        let json = serde_json::to_string(&*NARRATIVE_CATALOG).unwrap();
        let parsed: Vec<NarrativeRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), NARRATIVE_CATALOG.len());
        assert_eq!(parsed[4].theme, Theme::Rose);
        assert_eq!(parsed[4].kind, RecordKind::DataHeavy);
    }

    #[test]
    fn test_theme_names() {
        for theme in Theme::all() {
            assert!(!theme.name().is_empty());
        }
        assert_eq!(Theme::all().len(), 7);
    }
}
