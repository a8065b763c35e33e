//! Static asset references and the hero-art fallback policy.
//!
//! Media resolution is external to the application; this module only
//! carries path strings, plus the one asset the binary reads itself: the
//! hero artwork shown behind the first page.

use std::fs;
use std::io;

use thiserror::Error;

/// Primary hero artwork, rendered behind the first page.
pub const HERO_ART_PATH: &str = "assets/avra3.txt";

/// Substituted once if the primary artwork cannot be read. No retry loop,
/// no further fallback chain beyond the built-in placeholder.
pub const HERO_ART_FALLBACK_PATH: &str = "assets/hero-fallback.txt";

/// Decorative noise texture behind the intro screen. Cosmetic only, never
/// fetched by the application.
pub const INTRO_TEXTURE_URL: &str = "https://grainy-gradients.vercel.app/noise.svg";

/// Decorative noise texture behind the ambient page backgrounds. Cosmetic
/// only, never fetched by the application.
pub const AMBIENT_TEXTURE_URL: &str = "https://grainy-gradients.vercel.app/noise.svg";

/// Failure to read an art asset from disk.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read art asset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Hero artwork lines with the one-shot fallback already applied.
#[derive(Debug, Clone)]
pub struct HeroArt {
    lines: Vec<String>,
    failed_over: bool,
}

impl HeroArt {
    /// Load the hero artwork from the standard paths.
    pub fn load() -> Self {
        Self::load_from(HERO_ART_PATH, HERO_ART_FALLBACK_PATH)
    }

    /// Load artwork from `primary`, substituting `fallback` at most once on
    /// read failure and settling for the built-in placeholder if both are
    /// unreadable. Load failure is never surfaced to the viewer.
    pub fn load_from(primary: &str, fallback: &str) -> Self {
        match read_art(primary) {
            Ok(lines) => Self {
                lines,
                failed_over: false,
            },
            Err(_) => match read_art(fallback) {
                Ok(lines) => Self {
                    lines,
                    failed_over: true,
                },
                Err(_) => Self {
                    lines: placeholder_art(),
                    failed_over: true,
                },
            },
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True when the primary artwork failed and a substitute is shown.
    pub fn failed_over(&self) -> bool {
        self.failed_over
    }
}

fn read_art(path: &str) -> Result<Vec<String>, AssetError> {
    let text = fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_string(),
        source,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Compiled-in stand-in: a sketch of the object against the starfield.
fn placeholder_art() -> Vec<String> {
    [
        "          .                 *                    .        ",
        "    *          .                    .                     ",
        "                      ___                  *              ",
        "         .        .-''   ''-.                       .     ",
        "                 /  o   .    \\      ~~~~~~~~~~           ",
        "        *       |   .      o  | ~~~~   3I/ATLAS   ~~~~    ",
        "                 \\     o     / ~~~~~~~~~~~~~~~~~~        ",
        "            .     '-.____.-'              .               ",
        "                              *                     *     ",
        "      .             *                  .                  ",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("paradox-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_primary_art_loads_without_failover() {
        let path = scratch_path("primary.txt");
        fs::write(&path, "line one\nline two\n").unwrap();

        let art = HeroArt::load_from(path.to_str().unwrap(), "does/not/exist.txt");
        assert!(!art.failed_over());
        assert_eq!(art.lines(), ["line one", "line two"]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_primary_substitutes_fallback_once() {
        let fallback = scratch_path("fallback.txt");
        fs::write(&fallback, "substitute art\n").unwrap();

        let art = HeroArt::load_from("does/not/exist.txt", fallback.to_str().unwrap());
        assert!(art.failed_over());
        assert_eq!(art.lines(), ["substitute art"]);

        fs::remove_file(&fallback).ok();
    }

    #[test]
    fn test_both_missing_uses_placeholder() {
        let art = HeroArt::load_from("does/not/exist.txt", "also/missing.txt");
        assert!(art.failed_over());
        assert!(!art.lines().is_empty());
        assert!(art.lines().iter().any(|l| l.contains("3I/ATLAS")));
    }

    #[test]
    fn test_read_art_reports_path() {
        let err = read_art("no/such/asset.txt").unwrap_err();
        assert!(err.to_string().contains("no/such/asset.txt"));
    }
}
