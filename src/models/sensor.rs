use serde::Serialize;

/// One decoded row of sensor-query output.
///
/// Serialized keys are the low-level discovery macros consumed by the
/// monitoring server; field order here is the order in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SensorRecord {
    #[serde(rename = "{#SENSOR.ID}")]
    pub id: String,
    #[serde(rename = "{#SENSOR.NAME}")]
    pub name: String,
    #[serde(rename = "{#SENSOR.UNITS}")]
    pub unit: String,
    #[serde(rename = "{#SENSOR.LOWER_CRIT}")]
    pub lower_critical: String,
    #[serde(rename = "{#SENSOR.LOWER_WARN}")]
    pub lower_warning: String,
    #[serde(rename = "{#SENSOR.UPPER_CRIT}")]
    pub upper_critical: String,
    #[serde(rename = "{#SENSOR.UPPER_WARN}")]
    pub upper_warning: String,
    #[serde(rename = "{#SENSOR.STATUS}")]
    pub status: String,
}
