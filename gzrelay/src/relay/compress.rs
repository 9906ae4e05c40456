//! Gzip compression of the fetched payload.

use std::io::Write;

use anyhow::Context;
use flate2::{Compression, write::GzEncoder};

use crate::errors::Result;

/// Compress the whole payload in one pass as a single gzip member.
pub fn gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2 + 64), Compression::default());
    encoder.write_all(data).context("gzip encoding failed")?;
    Ok(encoder.finish().context("gzip encoding failed")?)
}
