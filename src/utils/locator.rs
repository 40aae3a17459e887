use log::{debug, trace};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DiscoveryError;

/// Name of the sensor-query executable.
pub const BINARY_NAME: &str = "ipmi-sensors";

/// Standard binary directories, searched in this order.
pub const SEARCH_DIRS: [&str; 6] = [
    "/bin",
    "/sbin",
    "/usr/bin",
    "/usr/sbin",
    "/usr/local/bin",
    "/usr/local/sbin",
];

/// Find `binary` in the first of `dirs` holding a non-directory entry of
/// that name. Entries that cannot be inspected count as absent.
pub fn locate<P: AsRef<Path>>(binary: &str, dirs: &[P]) -> Result<PathBuf, DiscoveryError> {
    for dir in dirs {
        let candidate = dir.as_ref().join(binary);
        match fs::metadata(&candidate) {
            Ok(meta) if !meta.is_dir() => {
                debug!("Found {} at {}", binary, candidate.display());
                return Ok(candidate);
            }
            Ok(_) => trace!("Skipping directory {}", candidate.display()),
            Err(e) => trace!("Skipping {}: {}", candidate.display(), e),
        }
    }

    Err(DiscoveryError::BinaryNotFound {
        binary: binary.to_string(),
    })
}
