use log::debug;
use std::io::{self, Write};

use crate::error::DiscoveryError;
use crate::models::sensor::SensorRecord;

/// Serialize the full record list as one JSON array, newline-terminated.
pub fn encode(records: &[SensorRecord]) -> Result<String, DiscoveryError> {
    let mut document = serde_json::to_string(records).map_err(io::Error::from)?;
    document.push('\n');
    Ok(document)
}

/// Write the document in one piece; nothing is written if encoding fails.
pub fn emit<W: Write>(out: &mut W, records: &[SensorRecord]) -> Result<(), DiscoveryError> {
    let document = encode(records)?;
    out.write_all(document.as_bytes())?;
    out.flush()?;
    debug!("Emitted discovery document with {} sensors", records.len());
    Ok(())
}
