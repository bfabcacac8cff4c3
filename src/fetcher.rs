use crate::error::FetchError;
use crate::models::{Outcome, Todo};
use crate::transport::{HttpTransport, Transport};
use log::debug;
use serde_json::Value;
use std::io::Write;

pub const TODO_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

pub struct Fetcher<T: Transport> {
    transport: T,
    url: String,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        Self::with_url(transport, TODO_URL)
    }

    /// Targets `url` instead of [`TODO_URL`]. Only reachable from library code.
    pub fn with_url(transport: T, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues one GET and classifies the response. Only an exact 200 has its
    /// body decoded; any other status is reported without reading the body.
    pub fn fetch(&self) -> Result<Outcome, FetchError> {
        debug!("GET {}", self.url);
        let response = self.transport.get(&self.url)?;
        debug!("{} responded with status {}", self.url, response.status);

        if response.status != 200 {
            return Ok(Outcome::Failure(response.status));
        }

        let payload: Value = serde_json::from_slice(&response.body)?;
        if let Some(todo) = Todo::from_payload(&payload) {
            debug!(
                "todo #{} for user {}: {:?} (completed: {})",
                todo.id, todo.user_id, todo.title, todo.completed
            );
        }
        Ok(Outcome::Data(payload))
    }

    /// Fetches and writes exactly one line to `out`. Nothing is written when
    /// the fetch fails.
    pub fn run<W: Write>(&self, mut out: W) -> Result<(), FetchError> {
        let outcome = self.fetch()?;
        writeln!(out, "{}", outcome)?;
        out.flush()?;
        Ok(())
    }
}

/// Fetches [`TODO_URL`] with a default HTTP client and prints the outcome to
/// stdout.
pub fn fetch_example() -> Result<(), FetchError> {
    let fetcher = Fetcher::new(HttpTransport::new()?);
    fetcher.run(std::io::stdout().lock())
}
