use core::time::Duration;
use log::debug;
use reqwest::blocking::Client;
use reqwest::StatusCode;

use super::{parse_batch, summarize, Report};
use crate::error::CycleError;

/// Blocking client for the collector's `/data` endpoint.
pub struct Collector {
    client: Client,
    url: String,
    timeout: Duration,
}

impl Collector {
    pub fn new(url: &str, timeout: Duration) -> Result<Collector, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Collector {
            client,
            url: url.to_string(),
            timeout,
        })
    }

    /// Issue the GET and read the whole body. The response is dropped before
    /// returning, on the error paths too.
    pub fn fetch(&self) -> Result<(StatusCode, String), CycleError> {
        let response = self.client.get(&self.url).send().map_err(|err| {
            debug!("request to {} failed (timeout was {:?})", self.url, self.timeout);
            CycleError::from(err)
        })?;
        let status = response.status();
        let body = response.text().map_err(|err| {
            if err.is_timeout() {
                CycleError::Timeout
            } else {
                CycleError::Body(err.to_string())
            }
        })?;
        debug!("collector answered {status} with {} bytes", body.len());
        Ok((status, body))
    }

    /// One full fetch, decode and aggregate pass.
    pub fn poll(&self) -> Result<Report, CycleError> {
        let (status, body) = self.fetch()?;
        let batch = parse_batch(&body).map_err(|err| match err {
            CycleError::Decode(msg) if !status.is_success() => {
                CycleError::Decode(format!("{msg} (collector answered {status})"))
            }
            other => other,
        })?;
        Ok(summarize(&batch))
    }
}
