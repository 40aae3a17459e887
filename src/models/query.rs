use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::ValidationError;

/// Sensor types accepted by `--sensor-types`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorCategory {
    Temperature,
    Voltage,
    Fan,
    PhysicalSecurity,
    PowerSupply,
}

impl SensorCategory {
    pub const ALL: [SensorCategory; 5] = [
        SensorCategory::Temperature,
        SensorCategory::Voltage,
        SensorCategory::Fan,
        SensorCategory::PhysicalSecurity,
        SensorCategory::PowerSupply,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorCategory::Temperature => "Temperature",
            SensorCategory::Voltage => "Voltage",
            SensorCategory::Fan => "Fan",
            SensorCategory::PhysicalSecurity => "Physical_Security",
            SensorCategory::PowerSupply => "Power_Supply",
        }
    }

    /// Comma-joined list shown to operators on rejection.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for SensorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or(ValidationError::UnsupportedSensorType)
    }
}

/// Validated connection and query parameters.
///
/// Only `validator::validate` builds one, so the invoker never sees
/// unchecked input.
#[derive(Clone, PartialEq, Eq)]
pub struct QueryParameters {
    pub(crate) host: Ipv4Addr,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) category: SensorCategory,
}

impl QueryParameters {
    pub fn host(&self) -> Ipv4Addr {
        self.host
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn category(&self) -> SensorCategory {
        self.category
    }
}

impl fmt::Debug for QueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryParameters")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"***")
            .field("category", &self.category)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_sensitive() {
        assert_eq!("Fan".parse::<SensorCategory>(), Ok(SensorCategory::Fan));
        assert_eq!(
            "Power_Supply".parse::<SensorCategory>(),
            Ok(SensorCategory::PowerSupply)
        );
        assert_eq!(
            "fan".parse::<SensorCategory>(),
            Err(ValidationError::UnsupportedSensorType)
        );
        assert_eq!(
            "Memory".parse::<SensorCategory>(),
            Err(ValidationError::UnsupportedSensorType)
        );
    }

    #[test]
    fn test_category_display_round_trips_whitelist_spelling() {
        for category in SensorCategory::ALL {
            assert_eq!(category.to_string().parse::<SensorCategory>(), Ok(category));
        }
        assert_eq!(SensorCategory::PhysicalSecurity.to_string(), "Physical_Security");
    }

    #[test]
    fn test_debug_redacts_password() {
        let params = QueryParameters {
            host: Ipv4Addr::new(10, 0, 0, 1),
            username: "admin".to_string(),
            password: "Secret42".to_string(),
            category: SensorCategory::Voltage,
        };
        let rendered = format!("{:?}", params);
        assert!(!rendered.contains("Secret42"));
        assert!(rendered.contains("admin"));
    }
}
