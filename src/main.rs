use env_logger::{Builder, WriteStyle};
use std::io;
use std::process::ExitCode;

use ipmi_discovery::config::AppConfig;

fn main() -> ExitCode {
    let config = AppConfig::default();

    // Logs go to stderr; stdout is reserved for the discovery document
    Builder::new()
        .filter_level(config.get_log_level())
        .write_style(WriteStyle::Auto)
        .format_timestamp_secs()
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ExitCode::from(ipmi_discovery::execute(std::env::args_os(), &mut out))
}
