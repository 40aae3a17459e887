use log::debug;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

use crate::error::ValidationError;
use crate::models::query::{QueryParameters, SensorCategory};

const USERNAME_PATTERN: &str = r"^[A-Za-z]+$";
const PASSWORD_PATTERN: &str = r"^[A-Za-z0-9]+$";

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();
static PASSWORD_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| Regex::new(USERNAME_PATTERN).unwrap())
}

fn password_regex() -> &'static Regex {
    PASSWORD_RE.get_or_init(|| Regex::new(PASSWORD_PATTERN).unwrap())
}

/// Dotted-quad IPv4 literal only; hostnames and IPv6 are rejected.
pub fn is_ipv4_valid(host: &str) -> bool {
    host.parse::<Ipv4Addr>().is_ok()
}

pub fn is_username_valid(username: &str) -> bool {
    username_regex().is_match(username)
}

pub fn is_password_valid(password: &str) -> bool {
    password_regex().is_match(password)
}

pub fn is_sensor_category_valid(category: &str) -> bool {
    category.parse::<SensorCategory>().is_ok()
}

/// Check the four raw arguments in order, stopping at the first rejection.
pub fn validate(
    host: &str,
    username: &str,
    password: &str,
    category: &str,
) -> Result<QueryParameters, ValidationError> {
    let host = host
        .parse::<Ipv4Addr>()
        .map_err(|_| ValidationError::InvalidHost)?;

    if !is_username_valid(username) {
        return Err(ValidationError::InvalidUsername);
    }

    if !is_password_valid(password) {
        return Err(ValidationError::InvalidPassword);
    }

    let category = category.parse::<SensorCategory>()?;

    debug!("Validated query for {} ({}) as {}", host, category, username);

    Ok(QueryParameters {
        host,
        username: username.to_string(),
        password: password.to_string(),
        category,
    })
}
