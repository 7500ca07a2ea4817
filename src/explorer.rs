//! User-facing operations.
//!
//! Each method runs one service call, reports the outcome on the output
//! stream, and swallows the failure so the menu loop can continue. Only
//! errors writing to the console itself are returned.

use crate::api::Fetch;
use crate::characters::{self, Comparison, Connections};
use crate::config::{Config, SPECIES_FILE};
use crate::models::{Character, file_name_for};
use crate::stats;
use crate::storage::Storage;
use crate::viz;
use serde::Serialize;
use std::io::{self, Write};

pub struct Explorer<F, W> {
    fetch: F,
    config: Config,
    storage: Storage,
    out: W,
}

impl<F: Fetch, W: Write> Explorer<F, W> {
    pub fn new(fetch: F, config: Config, out: W) -> Self {
        let storage = Storage::new(config.output_dir.clone());
        Self {
            fetch,
            config,
            storage,
            out,
        }
    }

    /// Console stream, for the menu's prompts.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Look up `name`, save the first match and return it.
    pub fn search_character(&mut self, name: &str) -> io::Result<Option<Character>> {
        match characters::search(&self.fetch, &self.config, name) {
            Ok(Some(ch)) => {
                writeln!(self.out, "\nFound: {}", ch.name())?;
                self.save(&ch, &file_name_for(ch.name()))?;
                Ok(Some(ch))
            }
            Ok(None) => {
                writeln!(self.out, "Character not found.")?;
                Ok(None)
            }
            Err(e) => {
                log::warn!("character search failed: {e}");
                writeln!(self.out, "Request failed: {e}")?;
                Ok(None)
            }
        }
    }

    pub fn compare_characters(&mut self, first: &str, second: &str) -> io::Result<()> {
        let a = self.search_character(first)?;
        let b = self.search_character(second)?;
        let (Some(a), Some(b)) = (a, b) else {
            writeln!(
                self.out,
                "Cannot compare. One or both characters not found."
            )?;
            return Ok(());
        };
        let cmp = characters::compare(&a, &b);
        self.print_comparison(&cmp)
    }

    pub fn find_connections(&mut self, name: &str) -> io::Result<()> {
        let Some(ch) = self.search_character(name)? else {
            return Ok(());
        };
        match characters::connections(&self.fetch, &ch) {
            Ok(conn) => self.print_connections(&conn),
            Err(e) => {
                log::warn!("connection walk for {} failed: {e}", ch.name());
                writeln!(self.out, "Error fetching connections: {e}")
            }
        }
    }

    /// Average lifespan over all species, saved as JSON and drawn as a chart.
    pub fn species_lifespan_stats(&mut self) -> io::Result<()> {
        let data = match stats::collect_lifespans(
            &self.fetch,
            &self.config.species_url(),
            self.config.max_pages,
        ) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("species walk failed: {e}");
                return writeln!(self.out, "Failed to fetch species data: {e}");
            }
        };

        let Some(summary) = stats::summarize(&data) else {
            return writeln!(self.out, "No valid lifespan data found.");
        };
        writeln!(self.out, "\nAverage Lifespan: {:.2} years", summary.mean)?;
        self.save(&data.to_mapping(), SPECIES_FILE)?;
        self.render_chart(&data.labels(), &data.values())
    }

    fn render_chart(&mut self, labels: &[String], values: &[u64]) -> io::Result<()> {
        let path = self.config.chart_path();
        let rendered = std::fs::create_dir_all(&self.config.output_dir)
            .map_err(anyhow::Error::from)
            .and_then(|_| {
                viz::plot_lifespans(
                    labels,
                    values,
                    &path,
                    self.config.chart_width,
                    self.config.chart_height,
                )
            });
        if let Err(e) = rendered {
            log::warn!("chart rendering failed: {e:#}");
            return writeln!(self.out, "Failed to create chart: {e:#}");
        }
        writeln!(self.out, "Chart saved as {}", path.display())?;

        if self.config.show_chart
            && let Err(e) = viz::show(&path)
        {
            log::warn!("chart viewer failed: {e:#}");
            writeln!(self.out, "Failed to open chart viewer: {e:#}")?;
        }
        Ok(())
    }

    /// Write a JSON file, reporting either the path or the error.
    fn save<T: Serialize + ?Sized>(&mut self, value: &T, filename: &str) -> io::Result<()> {
        match self.storage.save_json(value, filename) {
            Ok(path) => writeln!(self.out, "Saved to {}", path.display()),
            Err(e) => {
                log::warn!("{e}");
                writeln!(self.out, "Error saving file: {e}")
            }
        }
    }

    fn print_comparison(&mut self, cmp: &Comparison) -> io::Result<()> {
        writeln!(
            self.out,
            "\n--- Comparison: {} vs {} ---",
            cmp.left_name, cmp.right_name
        )?;
        for row in &cmp.rows {
            writeln!(self.out, "{}: {} vs {}", row.label, row.left, row.right)?;
        }
        Ok(())
    }

    fn print_connections(&mut self, conn: &Connections) -> io::Result<()> {
        writeln!(self.out, "\nConnections for {}:", conn.name)?;
        writeln!(self.out, "Homeworld: {}", conn.homeworld)?;
        writeln!(self.out, "Films:")?;
        for title in &conn.films {
            writeln!(self.out, " - {title}")?;
        }
        Ok(())
    }
}
