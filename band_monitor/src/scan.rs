use crate::Result;
use serde::Deserialize;
use std::{path::Path, str::FromStr};

/// Radio access technology of a scanned cell.
///
/// `Other` stands for every platform cell kind this system does not classify
/// (GSM, CDMA, TD-SCDMA and whatever else the radio reports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Technology {
    Lte,
    Wcdma,
    Nr,
    Other,
}

impl From<String> for Technology {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "lte" => Self::Lte,
            "wcdma" => Self::Wcdma,
            "nr" => Self::Nr,
            // Whatever else the platform reports stays unclassified instead
            // of failing the whole scan report.
            _ => Self::Other,
        }
    }
}

impl FromStr for Technology {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

/// One raw cell measurement as supplied by the platform radio.
#[derive(Debug, Clone, Deserialize)]
pub struct CellObservation {
    pub technology: Technology,
    /// Raw EARFCN/UARFCN/NRARFCN. `None` when the platform could not supply
    /// the cell identity fields.
    pub channel: Option<i32>,
    pub signal_dbm: i32,
    #[serde(default)]
    pub registered: bool,
}

/// Result of one cell scan. Permission denial is distinguishable from a scan
/// that returned zero cells.
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    PermissionDenied,
    Cells(Vec<CellObservation>),
}

/// Read-only boundary to the platform radio.
///
/// `scan` is one blocking call per snapshot and is never retried here;
/// keeping it off an interactive thread is the caller's concern.
pub trait CellScanner {
    fn operator_name(&self) -> Option<String>;
    fn network_type_code(&self) -> i32;
    fn scan(&self) -> ScanOutcome;
}

/// On-disk form of a captured scan, replayable through [`FileScanner`].
#[derive(Debug, Clone, Deserialize)]
pub struct ScanReport {
    pub operator_name: Option<String>,
    #[serde(default)]
    pub network_type_code: i32,
    #[serde(default)]
    pub permission_denied: bool,
    #[serde(default)]
    pub cells: Vec<CellObservation>,
}

/// A [`CellScanner`] backed by a JSON scan report, standing in for the device
/// radio.
#[derive(Debug)]
pub struct FileScanner {
    report: ScanReport,
}

impl FileScanner {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self {
            report: serde_json::from_str(&raw)?,
        })
    }
}

impl CellScanner for FileScanner {
    fn operator_name(&self) -> Option<String> {
        self.report.operator_name.clone()
    }

    fn network_type_code(&self) -> i32 {
        self.report.network_type_code
    }

    fn scan(&self) -> ScanOutcome {
        if self.report.permission_denied {
            ScanOutcome::PermissionDenied
        } else {
            ScanOutcome::Cells(self.report.cells.clone())
        }
    }
}
