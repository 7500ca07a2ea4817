//! swapi_explorer
//!
//! A small Rust library for exploring the public Star Wars API (SWAPI). Pairs
//! with the interactive `swapi-explorer` CLI.
//!
//! ### Features
//! - Search characters by name (first match wins) and save the raw record as JSON
//! - Compare two characters' height, mass, birth year and gender
//! - Resolve a character's homeworld and films
//! - Average species lifespan over the whole paginated collection, saved as
//!   JSON and drawn as a PNG/SVG bar chart
//!
//! ### Example
//! ```no_run
//! use swapi_explorer::{Client, Config, characters, stats};
//!
//! let client = Client::default();
//! let cfg = Config::default();
//! if let Some(luke) = characters::search(&client, &cfg, "Luke Skywalker")? {
//!     println!("{}", luke.attribute("height"));
//! }
//! let data = stats::collect_lifespans(&client, &cfg.species_url(), cfg.max_pages)?;
//! println!("{:?}", stats::summarize(&data));
//! # Ok::<(), swapi_explorer::api::ApiError>(())
//! ```

pub mod api;
pub mod characters;
pub mod config;
pub mod explorer;
pub mod menu;
pub mod models;
pub mod stats;
pub mod storage;
pub mod viz;

pub use api::{ApiError, Client, Fetch};
pub use config::Config;
pub use explorer::Explorer;
pub use models::{Character, LifespanDataset, Species};
