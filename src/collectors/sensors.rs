use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::time::Instant;

use crate::error::DiscoveryError;
use crate::models::sensor::SensorRecord;

/// Positional columns of `ipmi-sensors --output-sensor-thresholds
/// --comma-separated-output --no-header-output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id = 0,
    Name = 1,
    Type = 2,
    Reading = 3,
    Units = 4,
    LowerNonRecoverable = 5,
    LowerCritical = 6,
    LowerNonCritical = 7,
    UpperNonCritical = 8,
    UpperCritical = 9,
    UpperNonRecoverable = 10,
    Event = 11,
}

/// Number of columns every row must carry.
pub const COLUMN_COUNT: usize = 12;

impl Column {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Which column feeds each record field, in document order: id, name,
/// unit, lower critical, lower warning, upper critical, upper warning,
/// status.
///
/// Type, reading, and the non-recoverable thresholds are not part of the
/// discovery document.
pub const FIELD_COLUMNS: [Column; 8] = [
    Column::Id,
    Column::Name,
    Column::Units,
    Column::LowerCritical,
    Column::LowerNonCritical,
    Column::UpperCritical,
    Column::UpperNonCritical,
    Column::Event,
];

fn field(row: &StringRecord, column: Column) -> String {
    row.get(column.index()).unwrap_or_default().to_string()
}

fn to_record(row: &StringRecord) -> SensorRecord {
    let [id, name, unit, lower_critical, lower_warning, upper_critical, upper_warning, status] =
        FIELD_COLUMNS;

    SensorRecord {
        id: field(row, id),
        name: field(row, name),
        unit: field(row, unit),
        lower_critical: field(row, lower_critical),
        lower_warning: field(row, lower_warning),
        upper_critical: field(row, upper_critical),
        upper_warning: field(row, upper_warning),
        status: field(row, status),
    }
}

/// Decode headerless CSV rows into records, preserving row order.
///
/// Any malformed row fails the whole decode; nothing is returned for the
/// rows that did parse.
pub fn decode(output: &[u8]) -> Result<Vec<SensorRecord>, DiscoveryError> {
    let start = Instant::now();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(output);

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row_number = index as u64 + 1;
        let row = row.map_err(|e| DiscoveryError::Decode {
            row: e.position().map(|p| p.record() + 1).unwrap_or(row_number),
            reason: e.to_string(),
        })?;

        if row.len() < COLUMN_COUNT {
            return Err(DiscoveryError::Decode {
                row: row_number,
                reason: format!("expected {} fields, found {}", COLUMN_COUNT, row.len()),
            });
        }

        records.push(to_record(&row));
    }

    debug!(
        "Decoded {} sensor rows in {} ms",
        records.len(),
        start.elapsed().as_millis()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_row() {
        let records = decode(b"42,Temp1,Temperature,25,C,,10,15,80,90,,Nominal\n").unwrap();
        assert_eq!(
            records,
            vec![SensorRecord {
                id: "42".to_string(),
                name: "Temp1".to_string(),
                unit: "C".to_string(),
                lower_critical: "10".to_string(),
                lower_warning: "15".to_string(),
                upper_critical: "90".to_string(),
                upper_warning: "80".to_string(),
                status: "Nominal".to_string(),
            }]
        );
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(decode(b"").unwrap().is_empty());
    }

    #[test]
    fn test_decode_preserves_row_order() {
        let output = b"7,FAN2,Fan,4200,RPM,N/A,N/A,600,N/A,N/A,N/A,'OK'\n\
                       3,FAN1,Fan,4100,RPM,N/A,N/A,600,N/A,N/A,N/A,'OK'\n\
                       3,FAN1,Fan,4100,RPM,N/A,N/A,600,N/A,N/A,N/A,'OK'\n";
        let ids: Vec<String> = decode(output).unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["7", "3", "3"]);
    }

    #[test]
    fn test_decode_keeps_thresholds_verbatim() {
        let records = decode(b"5,PS1 Status,Power Supply,N/A,N/A,N/A,N/A,N/A,N/A,N/A,N/A,'Presence detected'\r\n").unwrap();
        assert_eq!(records[0].unit, "N/A");
        assert_eq!(records[0].lower_critical, "N/A");
        assert_eq!(records[0].status, "'Presence detected'");
    }

    #[test]
    fn test_decode_quoted_field_with_comma() {
        let records = decode(b"9,\"CPU1, Die\",Temperature,41,C,,5,10,85,95,,Nominal\n").unwrap();
        assert_eq!(records[0].name, "CPU1, Die");
        assert_eq!(records[0].upper_critical, "95");
    }

    #[test]
    fn test_decode_short_row_fails() {
        match decode(b"42,Temp1,Temperature,25,C\n") {
            Err(DiscoveryError::Decode { row, .. }) => assert_eq!(row, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_inconsistent_row_fails_whole_run() {
        let output = b"42,Temp1,Temperature,25,C,,10,15,80,90,,Nominal\n43,Temp2,Temperature\n";
        match decode(output) {
            Err(DiscoveryError::Decode { row, .. }) => assert_eq!(row, 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_decode_invalid_utf8_fails() {
        let output = b"42,Temp\xff,Temperature,25,C,,10,15,80,90,,Nominal\n";
        assert!(matches!(decode(output), Err(DiscoveryError::Decode { .. })));
    }

    #[test]
    fn test_schema_layout() {
        assert_eq!(Column::Event.index(), COLUMN_COUNT - 1);
        let indices: Vec<usize> = FIELD_COLUMNS.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 4, 6, 7, 9, 8, 11]);
    }

    #[test]
    fn test_each_field_reads_its_own_column() {
        let row = b"c0,c1,c2,c3,c4,c5,c6,c7,c8,c9,c10,c11\n";
        let record = decode(row).unwrap().remove(0);
        assert_eq!(
            record,
            SensorRecord {
                id: "c0".to_string(),
                name: "c1".to_string(),
                unit: "c4".to_string(),
                lower_critical: "c6".to_string(),
                lower_warning: "c7".to_string(),
                upper_critical: "c9".to_string(),
                upper_warning: "c8".to_string(),
                status: "c11".to_string(),
            }
        );
    }
}
