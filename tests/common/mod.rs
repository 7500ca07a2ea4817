#![allow(dead_code)]

use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use swapi_explorer::api::{ApiError, Fetch};
use swapi_explorer::{Config, Explorer};

pub const BASE: &str = "http://swapi.test/api";

/// In-memory stand-in for the API: URL -> JSON body. Unknown URLs answer 404.
#[derive(Default)]
pub struct FakeApi {
    routes: HashMap<String, Value>,
    failing: HashMap<String, u16>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, body: Value) -> Self {
        self.routes.insert(url.to_string(), body);
        self
    }

    pub fn fail(mut self, url: &str, status: u16) -> Self {
        self.failing.insert(url.to_string(), status);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for FakeApi {
    fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(url.to_string());
        if let Some(status) = self.failing.get(url) {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: *status,
            });
        }
        self.routes.get(url).cloned().ok_or_else(|| ApiError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

pub fn config(out_dir: &Path) -> Config {
    Config {
        base_url: BASE.into(),
        output_dir: out_dir.to_path_buf(),
        chart_width: 640,
        chart_height: 400,
        show_chart: false,
        ..Config::default()
    }
}

pub fn explorer<'a>(api: &'a FakeApi, out_dir: &Path) -> Explorer<&'a FakeApi, Vec<u8>> {
    Explorer::new(api, config(out_dir), Vec::new())
}

pub fn output(explorer: Explorer<&FakeApi, Vec<u8>>) -> String {
    String::from_utf8(explorer.into_output()).unwrap()
}

pub fn search_url(encoded_name: &str) -> String {
    format!("{BASE}/people/?search={encoded_name}")
}

pub fn luke() -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": format!("{BASE}/planets/1/"),
        "films": [
            format!("{BASE}/films/1/"),
            format!("{BASE}/films/2/"),
            format!("{BASE}/films/3/"),
        ],
        "url": format!("{BASE}/people/1/")
    })
}

pub fn leia() -> Value {
    json!({
        "name": "Leia Organa",
        "height": "150",
        "mass": "49",
        "birth_year": "19BBY",
        "homeworld": format!("{BASE}/planets/2/"),
        "films": []
    })
}

pub fn results(items: Vec<Value>, next: Option<&str>) -> Value {
    json!({ "count": items.len(), "next": next, "previous": null, "results": items })
}
