//! Scripted `VaultApi` for service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use trialmap_vault::{QueryResult, VaultApi, VaultError};

pub(crate) const TEST_WEB_URL: &str = "https://vault.test/ui";

enum Reply {
    Rows(Vec<Value>),
    Rejected(String),
    Transport(String),
}

/// Answers queries by the first registered fragment contained in the
/// whitespace-normalized query text. Unmatched queries return no rows.
pub(crate) struct MockVault {
    routes: Vec<(String, Reply)>,
    queries: Mutex<Vec<String>>,
}

impl MockVault {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn on(mut self, fragment: &str, rows: Vec<Value>) -> Self {
        self.routes.push((fragment.to_string(), Reply::Rows(rows)));
        self
    }

    pub fn reject_on(mut self, fragment: &str, errors: &str) -> Self {
        self.routes
            .push((fragment.to_string(), Reply::Rejected(errors.to_string())));
        self
    }

    pub fn transport_error_on(mut self, fragment: &str) -> Self {
        self.routes.push((
            fragment.to_string(),
            Reply::Transport("connection reset by peer".to_string()),
        ));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn count_matching(&self, fragment: &str) -> usize {
        self.queries()
            .iter()
            .filter(|q| q.contains(fragment))
            .count()
    }
}

#[async_trait]
impl VaultApi for MockVault {
    async fn execute_query(&self, query: &str) -> trialmap_vault::Result<QueryResult> {
        let normalized = query.split_whitespace().collect::<Vec<_>>().join(" ");
        self.queries.lock().unwrap().push(normalized.clone());

        let reply = self
            .routes
            .iter()
            .find(|(fragment, _)| normalized.contains(fragment.as_str()))
            .map(|(_, reply)| reply);

        match reply {
            Some(Reply::Rows(rows)) => Ok(rows
                .iter()
                .filter_map(|row| row.as_object().cloned())
                .collect()),
            Some(Reply::Rejected(errors)) => Err(VaultError::Rejected(errors.clone())),
            Some(Reply::Transport(message)) => Err(VaultError::invalid_response(message.clone())),
            None => Ok(Vec::new()),
        }
    }

    fn web_url(&self) -> &str {
        TEST_WEB_URL
    }
}
