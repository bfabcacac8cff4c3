pub mod cli;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod transport;

pub use error::FetchError;
pub use fetcher::{fetch_example, Fetcher, TODO_URL};
