#![cfg(test)]

use std::{cell::RefCell, collections::HashMap};

use serde_json::{Value, json};

use crate::{error::RequestError, github::Transport};

enum Canned {
    Ok(Value),
    Status(u16),
    Network(String),
}

/// In-memory transport answering from a table of canned responses.
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, Canned>,
    requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, url: &str, body: Value) -> Self {
        self.routes.insert(url.to_string(), Canned::Ok(body));
        self
    }

    pub fn status(mut self, url: &str, code: u16) -> Self {
        self.routes.insert(url.to_string(), Canned::Status(code));
        self
    }

    pub fn network_error(mut self, url: &str, message: &str) -> Self {
        self.routes
            .insert(url.to_string(), Canned::Network(message.to_string()));
        self
    }

    /// Every request made so far, with its query pairs.
    pub fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, RequestError> {
        self.requests.borrow_mut().push((
            url.to_string(),
            query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        ));
        match self.routes.get(url) {
            Some(Canned::Ok(body)) => Ok(body.clone()),
            Some(Canned::Status(code)) => Err(RequestError::Status(*code)),
            Some(Canned::Network(message)) => Err(RequestError::Network(message.clone())),
            None => Err(RequestError::Network(format!("no route to {url}"))),
        }
    }
}

pub fn snapshot_json(forks: u64, stars: u64, pulls_url: &str) -> Value {
    json!({
        "forks_count": forks,
        "stargazers_count": stars,
        "pulls_url": pulls_url,
    })
}

pub fn pulls_json(authors: &[&str]) -> Value {
    Value::Array(
        authors
            .iter()
            .enumerate()
            .map(|(i, login)| json!({"number": i + 1, "user": {"login": login}}))
            .collect(),
    )
}

pub fn releases_json(names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .map(|name| json!({"name": name, "tag_name": name.to_lowercase()}))
            .collect(),
    )
}
