//! Synchronous client for the **Star Wars API** (SWAPI).
//!
//! Every call is one blocking `GET` that returns the decoded JSON body. There is no
//! retry: a failed request is surfaced once as an [`ApiError`] and the caller decides
//! how to report it.
//!
//! Typical usage:
//! ```no_run
//! # use swapi_explorer::api::{Client, Fetch};
//! let client = Client::default();
//! let page = client.get_json("https://swapi.dev/api/species/")?;
//! # Ok::<(), swapi_explorer::api::ApiError>(())
//! ```

use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("GET {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url}: HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("GET {url}: invalid JSON body: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url}: unexpected response shape: {source}")]
    Shape {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("record has no {0} link")]
    MissingLink(&'static str),
    #[error("page limit exceeded ({0})")]
    PageLimit(u32),
}

/// Anything that can turn a URL into a JSON document.
///
/// [`Client`] is the real implementation; tests substitute an in-memory fake.
pub trait Fetch {
    fn get_json(&self, url: &str) -> Result<Value, ApiError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        (**self).get_json(url)
    }
}

/// Fetch `url` and decode it into `T`.
pub fn fetch_as<T, F>(fetch: &F, url: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    F: Fetch + ?Sized,
{
    let v = fetch.get_json(url)?;
    serde_json::from_value(v).map_err(|source| ApiError::Shape {
        url: url.to_string(),
        source,
    })
}

#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    pub fn new() -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("swapi_explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Request {
                url: String::new(),
                source,
            })?;
        Ok(Self { http })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new().expect("reqwest client build")
    }
}

impl Fetch for Client {
    fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        log::debug!("GET {url}");
        let resp = self.http.get(url).send().map_err(|source| ApiError::Request {
            url: url.to_string(),
            source,
        })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        resp.json().map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
