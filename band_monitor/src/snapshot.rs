//! Network snapshot assembly.
//!
//! One snapshot is a point-in-time aggregation of the operator identity, the
//! network generation and every visible cell, normalized through the channel
//! resolver. Snapshots are built fresh per request and never mutated;
//! identical inputs produce structurally equal values.

use crate::scan::{CellObservation, CellScanner, ScanOutcome, Technology};
use serde::{Serialize, Serializer};
use std::fmt;

/// Network generation label derived from the platform's raw
/// data-network-type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkType {
    TwoG,
    ThreeG,
    FourGLte,
    FiveGNr,
    Unknown,
}

impl NetworkType {
    /// Maps a raw platform network-type code. Many codes collapse onto one
    /// generation label; unknown codes stay `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            // GPRS, EDGE, CDMA, 1xRTT, iDEN
            1 | 2 | 4 | 7 | 11 => Self::TwoG,
            // UMTS, EVDO 0/A/B, HSDPA, HSUPA, HSPA, eHRPD, HSPA+
            3 | 5 | 6 | 8 | 9 | 10 | 12 | 14 | 15 => Self::ThreeG,
            13 => Self::FourGLte,
            20 => Self::FiveGNr,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TwoG => "2G",
            Self::ThreeG => "3G",
            Self::FourGLte => "4G LTE",
            Self::FiveGNr => "5G NR",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

impl Serialize for NetworkType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Operator identity with absence kept explicit instead of carried as a
/// sentinel string in the data model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorName {
    Named(String),
    Unknown,
    PermissionRequired,
}

impl OperatorName {
    /// Normalizes the platform-supplied display name; empty or absent names
    /// become `Unknown`.
    pub fn from_platform(name: Option<String>) -> Self {
        match name {
            Some(name) if !name.trim().is_empty() => Self::Named(name),
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for OperatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Unknown => f.write_str("Unknown"),
            Self::PermissionRequired => f.write_str("Permission Required"),
        }
    }
}

impl Serialize for OperatorName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One classified cell: band label, center frequency, measured signal and the
/// raw channel number it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyInfo {
    pub band: String,
    pub frequency_mhz: u32,
    pub signal_dbm: i32,
    pub channel: i32,
    pub is_active: bool,
}

impl FrequencyInfo {
    /// Copy of this entry marked as the cell the device is camped on.
    fn promoted(&self) -> Self {
        Self {
            is_active: true,
            ..self.clone()
        }
    }
}

/// Point-in-time view of the radio environment.
///
/// At most one entry of `available_frequencies` is marked active, and it
/// equals `current_frequency` whenever that is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    pub operator: OperatorName,
    pub network_type: NetworkType,
    pub current_frequency: Option<FrequencyInfo>,
    pub available_frequencies: Vec<FrequencyInfo>,
}

impl NetworkInfo {
    /// Fixed snapshot returned when the platform denies access to cell
    /// measurements. No raw data is consulted.
    pub fn permission_required() -> Self {
        Self {
            operator: OperatorName::PermissionRequired,
            network_type: NetworkType::Unknown,
            current_frequency: None,
            available_frequencies: Vec::new(),
        }
    }
}

/// Normalizes one raw observation into a [`FrequencyInfo`].
///
/// Returns `None` for observations this system does not report: unclassified
/// technologies, and NR cells whose identity fields the platform could not
/// supply. Dropped observations are not errors.
pub fn parse_observation(cell: &CellObservation) -> Option<FrequencyInfo> {
    let info = match (cell.technology, cell.channel) {
        (Technology::Lte, Some(earfcn)) => FrequencyInfo {
            band: format!("LTE Band {}", channel_resolver::lte_band(earfcn)),
            frequency_mhz: channel_resolver::lte_frequency(earfcn),
            signal_dbm: cell.signal_dbm,
            channel: earfcn,
            is_active: false,
        },
        (Technology::Wcdma, Some(uarfcn)) => FrequencyInfo {
            band: format!("WCDMA Band {}", channel_resolver::wcdma_band(uarfcn)),
            frequency_mhz: channel_resolver::wcdma_frequency(uarfcn),
            signal_dbm: cell.signal_dbm,
            channel: uarfcn,
            is_active: false,
        },
        // The cell is visible but its identity could not be read; report it
        // as unclassified. Channel 0 always means unclassified.
        (Technology::Lte | Technology::Wcdma, None) => FrequencyInfo {
            band: "Unknown".to_string(),
            frequency_mhz: 0,
            signal_dbm: cell.signal_dbm,
            channel: 0,
            is_active: false,
        },
        (Technology::Nr, Some(nrarfcn)) => FrequencyInfo {
            band: "5G NR".to_string(),
            frequency_mhz: channel_resolver::nr_frequency(nrarfcn),
            signal_dbm: cell.signal_dbm,
            channel: nrarfcn,
            is_active: false,
        },
        // NR identity missing means the platform cannot describe the cell at
        // all; skip it instead of synthesizing a result.
        (Technology::Nr, None) => return None,
        (Technology::Other, _) => return None,
    };
    Some(info)
}

/// Assembles one snapshot from raw platform inputs.
///
/// Observations are kept in scan order with no de-duplication. The first
/// parsed observation flagged registered is promoted to the current cell;
/// both the promoted copy and its list entry carry `is_active = true`.
pub fn build_snapshot(
    operator_name: Option<String>,
    network_type_code: i32,
    outcome: &ScanOutcome,
) -> NetworkInfo {
    let cells = match outcome {
        ScanOutcome::PermissionDenied => return NetworkInfo::permission_required(),
        ScanOutcome::Cells(cells) => cells,
    };

    let mut available = Vec::with_capacity(cells.len());
    let mut current: Option<FrequencyInfo> = None;

    for cell in cells {
        let Some(info) = parse_observation(cell) else {
            continue;
        };
        if cell.registered && current.is_none() {
            let active = info.promoted();
            current = Some(active.clone());
            available.push(active);
        } else {
            available.push(info);
        }
    }

    tracing::debug!(
        visible = available.len(),
        registered = current.is_some(),
        "assembled network snapshot"
    );

    NetworkInfo {
        operator: OperatorName::from_platform(operator_name),
        network_type: NetworkType::from_code(network_type_code),
        current_frequency: current,
        available_frequencies: available,
    }
}

/// Pull interface for callers: one blocking read of the scanner, one
/// snapshot back.
pub fn network_info(scanner: &impl CellScanner) -> NetworkInfo {
    build_snapshot(
        scanner.operator_name(),
        scanner.network_type_code(),
        &scanner.scan(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lte(earfcn: i32, signal_dbm: i32, registered: bool) -> CellObservation {
        CellObservation {
            technology: Technology::Lte,
            channel: Some(earfcn),
            signal_dbm,
            registered,
        }
    }

    #[rstest]
    #[case(1, NetworkType::TwoG)] // GPRS
    #[case(2, NetworkType::TwoG)] // EDGE
    #[case(4, NetworkType::TwoG)] // CDMA
    #[case(7, NetworkType::TwoG)] // 1xRTT
    #[case(11, NetworkType::TwoG)] // iDEN
    #[case(3, NetworkType::ThreeG)] // UMTS
    #[case(8, NetworkType::ThreeG)] // HSDPA
    #[case(12, NetworkType::ThreeG)] // EVDO B
    #[case(15, NetworkType::ThreeG)] // HSPA+
    #[case(13, NetworkType::FourGLte)]
    #[case(20, NetworkType::FiveGNr)]
    #[case(0, NetworkType::Unknown)]
    #[case(16, NetworkType::Unknown)]
    #[case(-1, NetworkType::Unknown)]
    fn network_type_code_mapping(#[case] code: i32, #[case] expected: NetworkType) {
        assert_eq!(expected, NetworkType::from_code(code));
    }

    #[test]
    fn parse_classifies_lte_observation() {
        let info = parse_observation(&lte(1300, -95, false)).expect("lte cell");
        assert_eq!("LTE Band 3", info.band);
        assert_eq!(1800, info.frequency_mhz);
        assert_eq!(-95, info.signal_dbm);
        assert_eq!(1300, info.channel);
        assert!(!info.is_active);
    }

    #[test]
    fn parse_keeps_out_of_table_channels_as_unknown_entries() {
        let info = parse_observation(&lte(50000, -101, false)).expect("lte cell");
        assert_eq!("LTE Band 0", info.band);
        assert_eq!(0, info.frequency_mhz);
        assert_eq!(50000, info.channel);
    }

    #[test]
    fn parse_reports_missing_identity_as_unclassified() {
        let cell = CellObservation {
            technology: Technology::Wcdma,
            channel: None,
            signal_dbm: -99,
            registered: false,
        };
        let info = parse_observation(&cell).expect("identity-less cell");
        assert_eq!("Unknown", info.band);
        assert_eq!(0, info.channel);
        assert_eq!(0, info.frequency_mhz);
    }

    #[test]
    fn parse_drops_nr_without_identity_and_other_technologies() {
        let nr = CellObservation {
            technology: Technology::Nr,
            channel: None,
            signal_dbm: -110,
            registered: true,
        };
        assert_eq!(None, parse_observation(&nr));

        let other = CellObservation {
            technology: Technology::Other,
            channel: Some(42),
            signal_dbm: -80,
            registered: true,
        };
        assert_eq!(None, parse_observation(&other));
    }

    #[test]
    fn parse_resolves_nr_frequency_by_truncation() {
        let nr = CellObservation {
            technology: Technology::Nr,
            channel: Some(632628),
            signal_dbm: -100,
            registered: false,
        };
        let info = parse_observation(&nr).expect("nr cell");
        assert_eq!("5G NR", info.band);
        assert_eq!(632, info.frequency_mhz);
    }

    #[test]
    fn empty_scan_yields_empty_snapshot() {
        let info = build_snapshot(Some("TestNet".to_string()), 13, &ScanOutcome::Cells(vec![]));
        assert_eq!(OperatorName::Named("TestNet".to_string()), info.operator);
        assert_eq!(NetworkType::FourGLte, info.network_type);
        assert_eq!(None, info.current_frequency);
        assert!(info.available_frequencies.is_empty());
    }

    #[test]
    fn first_registered_cell_becomes_current_in_list_and_summary() {
        let outcome = ScanOutcome::Cells(vec![
            lte(100, -90, false),
            lte(1300, -95, true),
            lte(3100, -99, true),
        ]);
        let info = build_snapshot(None, 13, &outcome);

        let current = info.current_frequency.as_ref().expect("registered cell");
        assert_eq!("LTE Band 3", current.band);
        assert!(current.is_active);

        // Same entry, same position, also marked active; later registered
        // cells stay inactive.
        assert_eq!(Some(current), info.available_frequencies.get(1));
        let active: Vec<_> = info
            .available_frequencies
            .iter()
            .filter(|f| f.is_active)
            .collect();
        assert_eq!(1, active.len());
    }

    #[test]
    fn no_registered_cell_leaves_current_absent() {
        let outcome = ScanOutcome::Cells(vec![lte(100, -90, false), lte(700, -92, false)]);
        let info = build_snapshot(None, 13, &outcome);
        assert_eq!(None, info.current_frequency);
        assert_eq!(2, info.available_frequencies.len());
    }

    #[test]
    fn duplicate_observations_are_preserved_in_scan_order() {
        let outcome = ScanOutcome::Cells(vec![lte(1300, -95, false), lte(1300, -95, false)]);
        let info = build_snapshot(None, 13, &outcome);
        assert_eq!(2, info.available_frequencies.len());
        assert_eq!(info.available_frequencies[0], info.available_frequencies[1]);
    }

    #[test]
    fn permission_denied_short_circuits_to_sentinel_snapshot() {
        let info = build_snapshot(
            Some("ShouldBeIgnored".to_string()),
            13,
            &ScanOutcome::PermissionDenied,
        );
        assert_eq!(OperatorName::PermissionRequired, info.operator);
        assert_eq!("Permission Required", info.operator.to_string());
        assert_eq!(NetworkType::Unknown, info.network_type);
        assert_eq!(None, info.current_frequency);
        assert!(info.available_frequencies.is_empty());
    }

    #[test]
    fn absent_and_blank_operator_names_normalize_to_unknown() {
        assert_eq!(OperatorName::Unknown, OperatorName::from_platform(None));
        assert_eq!(
            OperatorName::Unknown,
            OperatorName::from_platform(Some("  ".to_string()))
        );
        assert_eq!("Unknown", OperatorName::Unknown.to_string());
    }

    #[test]
    fn snapshot_building_is_deterministic() {
        let outcome = ScanOutcome::Cells(vec![lte(100, -90, false), lte(9400, -95, true)]);
        let first = build_snapshot(Some("TestNet".to_string()), 13, &outcome);
        let second = build_snapshot(Some("TestNet".to_string()), 13, &outcome);
        assert_eq!(first, second);
    }
}
