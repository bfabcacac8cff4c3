use crate::error::FetchError;
use reqwest::blocking::Client;

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs a single GET exchange. One call is one request on the wire.
pub trait Transport {
    fn get(&self, url: &str) -> Result<RawResponse, FetchError>;
}

/// Blocking `reqwest` client with library defaults: no custom headers,
/// default TLS verification and the client's own timeout.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let res = self.client.get(url).send()?;
        let status = res.status().as_u16();
        let body = res.bytes()?.to_vec();

        Ok(RawResponse { status, body })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        (**self).get(url)
    }
}
