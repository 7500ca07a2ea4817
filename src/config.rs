//! Runtime configuration shared by every operation.
//!
//! All paths and endpoints live here instead of in module-level constants, so the
//! same code can point at a mock server and a temporary directory in tests.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use std::path::PathBuf;

/// Public SWAPI root.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";
/// Output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "data";
/// Safety cap to avoid endless pagination on a malformed `next` link.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

pub const SPECIES_FILE: &str = "species_lifespans.json";
pub const CHART_FILE: &str = "species_lifespans_chart.png";

// Keep -, _, . readable in search terms
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub output_dir: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
    pub max_pages: u32,
    /// Open the rendered chart in the platform image viewer.
    pub show_chart: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            chart_width: 1200,
            chart_height: 600,
            max_pages: DEFAULT_MAX_PAGES,
            show_chart: true,
        }
    }
}

impl Config {
    /// `{base}/people/?search={name}` with the name percent-encoded.
    pub fn people_search_url(&self, name: &str) -> String {
        format!(
            "{}/people/?search={}",
            self.base(),
            percent_encoding::utf8_percent_encode(name, SAFE)
        )
    }

    /// First page of the species collection.
    pub fn species_url(&self) -> String {
        format!("{}/species/", self.base())
    }

    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(CHART_FILE)
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
