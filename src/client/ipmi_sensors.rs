use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;
use subprocess::{Exec, Redirection};

use crate::error::DiscoveryError;
use crate::models::query::QueryParameters;

/// # ipmi-sensors invocation
///
/// The FreeIPMI `ipmi-sensors` tool is queried over LAN with USER privilege.
/// Threshold columns are requested, unavailable sensors dropped, and output
/// forced to headerless CSV so rows can be decoded positionally. The SDR
/// cache is rebuilt quietly on every run.
///
/// Argument order is fixed:
///
/// | # | Argument                         |
/// |---|----------------------------------|
/// | 0 | --driver-type=LAN                |
/// | 1 | --hostname=HOST                  |
/// | 2 | --username=USERNAME              |
/// | 3 | --password=PASSWORD              |
/// | 4 | --privilege-level=USER           |
/// | 5 | --output-sensor-thresholds       |
/// | 6 | --ignore-not-available-sensors   |
/// | 7 | --comma-separated-output         |
/// | 8 | --no-header-output               |
/// | 9 | --quiet-cache                    |
/// | 10| --sdr-cache-recreate             |
/// | 11| --sensor-types=SENSOR_TYPE       |
pub struct IpmiSensors {
    binary: PathBuf,
}

impl IpmiSensors {
    pub fn new<P: Into<PathBuf>>(binary: P) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn arguments(params: &QueryParameters) -> Vec<String> {
        vec![
            "--driver-type=LAN".to_string(),
            format!("--hostname={}", params.host()),
            format!("--username={}", params.username()),
            format!("--password={}", params.password()),
            "--privilege-level=USER".to_string(),
            "--output-sensor-thresholds".to_string(),
            "--ignore-not-available-sensors".to_string(),
            "--comma-separated-output".to_string(),
            "--no-header-output".to_string(),
            "--quiet-cache".to_string(),
            "--sdr-cache-recreate".to_string(),
            format!("--sensor-types={}", params.category()),
        ]
    }

    /// Command line an operator can paste to reproduce the query.
    pub fn command_line(&self, args: &[String]) -> String {
        let mut line = self.binary.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    // Same as command_line with the password replaced, for logs.
    fn masked_command_line(&self, args: &[String]) -> String {
        let masked: Vec<String> = args
            .iter()
            .map(|arg| {
                if arg.starts_with("--password=") {
                    "--password=***".to_string()
                } else {
                    arg.clone()
                }
            })
            .collect();
        self.command_line(&masked)
    }

    /// Run the query and return the captured stdout.
    ///
    /// The child is always waited on before returning, including on failure.
    /// Stderr is captured only so it does not interleave with our output.
    pub fn query(&self, params: &QueryParameters) -> Result<Vec<u8>, DiscoveryError> {
        let args = Self::arguments(params);
        debug!("Executing: {}", self.masked_command_line(&args));

        let start = Instant::now();
        let result = Exec::cmd(&self.binary)
            .args(&args)
            .stdout(Redirection::Pipe)
            .stderr(Redirection::Pipe)
            .capture();
        debug!("ipmi-sensors execution took: {} ms", start.elapsed().as_millis());

        let failure = |reason: String| DiscoveryError::Execution {
            binary: self.binary_name(),
            command_line: self.command_line(&args),
            reason,
        };

        let capture = result.map_err(|e| failure(e.to_string()))?;
        if !capture.exit_status.success() {
            debug!("ipmi-sensors stderr: {}", capture.stderr_str().trim_end());
            return Err(failure(format!("{:?}", capture.exit_status)));
        }

        info!(
            "ipmi-sensors returned {} bytes for {} sensors on {}",
            capture.stdout.len(),
            params.category(),
            params.host()
        );
        Ok(capture.stdout)
    }

    fn binary_name(&self) -> String {
        self.binary
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.binary.display().to_string())
    }
}
