use thiserror::Error;

use crate::models::query::SensorCategory;

/// Rejection of one of the four input parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("HOST - is not valid IPv4 address!")]
    InvalidHost,

    #[error("USERNAME - not valid, accept only letters in username!")]
    InvalidUsername,

    #[error("PASSWORD - not valid, accept only letters and integers in password!")]
    InvalidPassword,

    #[error("SENSORS_TYPE - not supported, accept next types: {}", SensorCategory::supported_list())]
    UnsupportedSensorType,
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unable find: {binary}!")]
    BinaryNotFound { binary: String },

    #[error("{binary} connection error, try run command:\n{command_line}")]
    Execution {
        binary: String,
        command_line: String,
        reason: String,
    },

    #[error("Malformed sensor output at row {row}: {reason}")]
    Decode { row: u64, reason: String },

    #[error("Failed to write discovery document: {0}")]
    Output(#[from] std::io::Error),
}

impl DiscoveryError {
    /// Process exit code for this failure (sysexits.h values).
    pub fn exit_code(&self) -> u8 {
        match self {
            DiscoveryError::Validation(_) => 65,
            DiscoveryError::BinaryNotFound { .. } => 69,
            DiscoveryError::Execution { .. } => 70,
            DiscoveryError::Decode { .. } | DiscoveryError::Output(_) => 74,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_sensor_message_lists_categories() {
        let message = ValidationError::UnsupportedSensorType.to_string();
        assert_eq!(
            message,
            "SENSORS_TYPE - not supported, accept next types: Temperature,Voltage,Fan,Physical_Security,Power_Supply"
        );
    }

    #[test]
    fn test_execution_message_carries_command_line() {
        let err = DiscoveryError::Execution {
            binary: "ipmi-sensors".to_string(),
            command_line: "/usr/sbin/ipmi-sensors --driver-type=LAN".to_string(),
            reason: "exit status 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ipmi-sensors connection error, try run command:\n/usr/sbin/ipmi-sensors --driver-type=LAN"
        );
        assert_eq!(err.exit_code(), 70);
    }

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let codes = [
            DiscoveryError::from(ValidationError::InvalidHost).exit_code(),
            DiscoveryError::BinaryNotFound { binary: "x".into() }.exit_code(),
            DiscoveryError::Decode { row: 1, reason: "x".into() }.exit_code(),
        ];
        assert_eq!(codes, [65, 69, 74]);
    }
}
