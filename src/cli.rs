//! Command-line arguments (clap) and the usage line.

use clap::Parser;
use std::ffi::OsString;

/// Positional arguments after the program name.
pub const ARG_COUNT: usize = 4;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ipmi-discovery")]
#[command(about = "Low-level discovery of BMC sensors via ipmi-sensors", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// BMC address (IPv4 only)
    #[arg(value_name = "HOST", allow_hyphen_values = true)]
    pub host: String,

    /// BMC user (letters only)
    #[arg(value_name = "USERNAME", allow_hyphen_values = true)]
    pub username: String,

    /// BMC password (letters and digits only)
    #[arg(value_name = "PASSWORD", allow_hyphen_values = true)]
    pub password: String,

    /// Temperature, Voltage, Fan, Physical_Security or Power_Supply
    #[arg(value_name = "SENSOR_TYPE", allow_hyphen_values = true)]
    pub sensor_type: String,
}

/// Parse exactly four positionals; anything else is a usage error.
///
/// Every value reaches validation as written, including ones that look
/// like flags (`-h`, `-V`, `--`).
pub fn parse_from<I, T>(argv: I) -> Option<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.len() != ARG_COUNT + 1 {
        return None;
    }
    argv.insert(1, OsString::from("--"));
    Args::try_parse_from(argv).ok()
}

pub fn usage(program: &str) -> String {
    format!("Usage: {} HOST USERNAME PASSWORD SENSOR_TYPE", program)
}
