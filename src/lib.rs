use log::{debug, info};
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

pub mod cli;
pub mod client;
pub mod collectors;
pub mod config;
pub mod discovery;
pub mod error;
pub mod models;
pub mod utils;
pub mod validator;

use crate::cli::Args;
use crate::client::ipmi_sensors::IpmiSensors;
use crate::error::DiscoveryError;
use crate::models::SensorRecord;
use crate::utils::locator::{self, BINARY_NAME, SEARCH_DIRS};

/// Exit code for a wrong argument count.
pub const USAGE_EXIT_CODE: u8 = 64;

/// Validate, locate the tool, query the BMC and decode its rows.
pub fn discover(args: &Args) -> Result<Vec<SensorRecord>, DiscoveryError> {
    discover_in(args, &SEARCH_DIRS)
}

fn discover_in<P: AsRef<Path>>(
    args: &Args,
    search_dirs: &[P],
) -> Result<Vec<SensorRecord>, DiscoveryError> {
    let start = Instant::now();

    let params = validator::validate(&args.host, &args.username, &args.password, &args.sensor_type)?;
    let binary = locator::locate(BINARY_NAME, search_dirs)?;
    let output = IpmiSensors::new(binary).query(&params)?;
    let records = collectors::sensors::decode(&output)?;

    info!(
        "Discovered {} {} sensors on {} in {} ms",
        records.len(),
        params.category(),
        params.host(),
        start.elapsed().as_millis()
    );
    Ok(records)
}

/// One full query-and-print cycle. The document is only written once every
/// stage has succeeded.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), DiscoveryError> {
    run_in(args, &SEARCH_DIRS, out)
}

fn run_in<P: AsRef<Path>, W: Write>(
    args: &Args,
    search_dirs: &[P],
    out: &mut W,
) -> Result<(), DiscoveryError> {
    debug!("Starting discovery");
    let records = discover_in(args, search_dirs)?;
    discovery::emit(out, &records)
}

/// Process entry point: parse `argv`, run, and write the document, the
/// usage line or the operator diagnostic to `out`. Returns the exit code.
pub fn execute<I, T, W>(argv: I, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    execute_in(argv, &SEARCH_DIRS, out)
}

fn execute_in<I, T, P, W>(argv: I, search_dirs: &[P], out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    P: AsRef<Path>,
    W: Write,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let Some(args) = cli::parse_from(argv.iter().cloned()) else {
        debug!("Expected {} arguments, got {}", cli::ARG_COUNT, argv.len().saturating_sub(1));
        let program = argv
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| "ipmi-discovery".to_string());
        let _ = writeln!(out, "{}", cli::usage(&program));
        return USAGE_EXIT_CODE;
    };

    match run_in(&args, search_dirs, out) {
        Ok(()) => 0,
        Err(e) => {
            debug!("Discovery failed: {:?}", e);
            let _ = writeln!(out, "{}", e);
            e.exit_code()
        }
    }
}
