//! Ordered chart resolution — local store first, then the public mirror.
//!
//! Each source is a single shot: no retries, no write-back caching.
//! A failed or undecodable source is a miss; the resolver moves on to
//! the next one, and `NotFound` only falls out when the whole chain is
//! exhausted.

use log::{debug, warn};
use std::io;
use std::time::Duration;

use super::locator::ChartLocation;
use super::ChartError;

/// Where a resolved chart came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOrigin {
    Local,
    Remote,
}

impl ChartOrigin {
    pub fn label(self) -> &'static str {
        match self {
            ChartOrigin::Local => "local",
            ChartOrigin::Remote => "mirror",
        }
    }
}

/// Decoded-and-validated chart bytes.
#[derive(Debug, Clone)]
pub struct ResolvedChart {
    pub bytes: Vec<u8>,
    pub origin: ChartOrigin,
    pub width: u32,
    pub height: u32,
}

/// One resolution strategy in the fallback chain.
///
/// `Ok(None)` means "not here" — the resolver moves on in order. An
/// `Err` is the source's own fault report; the resolver logs it and
/// also moves on, because no chart failure is fatal to a render.
pub trait ChartSource: Send + Sync {
    fn name(&self) -> &str;

    fn origin(&self) -> ChartOrigin;

    fn fetch(&self, location: &ChartLocation) -> Result<Option<Vec<u8>>, ChartError>;
}

/// Reads the chart tree on local disk.
pub struct LocalStore;

impl ChartSource for LocalStore {
    fn name(&self) -> &str {
        "local_store"
    }

    fn origin(&self) -> ChartOrigin {
        ChartOrigin::Local
    }

    fn fetch(&self, location: &ChartLocation) -> Result<Option<Vec<u8>>, ChartError> {
        match std::fs::read(&location.local_path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Single-shot GET against the public mirror.
pub struct RemoteMirror {
    client: reqwest::blocking::Client,
}

impl RemoteMirror {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }
}

impl Default for RemoteMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSource for RemoteMirror {
    fn name(&self) -> &str {
        "remote_mirror"
    }

    fn origin(&self) -> ChartOrigin {
        ChartOrigin::Remote
    }

    fn fetch(&self, location: &ChartLocation) -> Result<Option<Vec<u8>>, ChartError> {
        let resp = self.client.get(&location.remote_url).send()?;
        let status = resp.status();
        if !status.is_success() {
            debug!("mirror returned {status} for {}", location.remote_url);
            return Ok(None);
        }
        Ok(Some(resp.bytes()?.to_vec()))
    }
}

/// Walks the source chain in order and validates the winner decodes.
pub struct ChartResolver {
    sources: Vec<Box<dyn ChartSource>>,
}

impl ChartResolver {
    pub fn new(sources: Vec<Box<dyn ChartSource>>) -> Self {
        Self { sources }
    }

    /// The production chain: local disk, then the public mirror.
    pub fn with_default_sources() -> Self {
        Self::new(vec![Box::new(LocalStore), Box::new(RemoteMirror::new())])
    }

    /// Resolve one chart. A local hit never touches the network.
    pub fn resolve(&self, location: &ChartLocation) -> Result<ResolvedChart, ChartError> {
        for source in &self.sources {
            let bytes = match source.fetch(location) {
                Ok(Some(bytes)) => bytes,
                Ok(None) => continue,
                Err(e) => {
                    warn!(
                        "chart source '{}' failed for {}: {e}",
                        source.name(),
                        location.remote_url
                    );
                    continue;
                }
            };

            match image::load_from_memory(&bytes) {
                Ok(img) => {
                    use image::GenericImageView;
                    let (width, height) = img.dimensions();
                    return Ok(ResolvedChart {
                        bytes,
                        origin: source.origin(),
                        width,
                        height,
                    });
                }
                Err(e) => {
                    debug!(
                        "undecodable chart bytes from '{}' for {}: {e}",
                        source.name(),
                        location.remote_url
                    );
                    continue;
                }
            }
        }

        Err(ChartError::NotFound)
    }
}
