use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{CofDataset, CofRecord};

/// Load a COF dataset from a CSV file.
///
/// Expected layout: header row with at least the columns `label`,
/// `bandgap_corr`, `homo_align_corr`, `lumo_align_corr`,
/// `effective_mass_electron`, `effective_mass_hole`, `spatial_overlap_corr`.
/// Any further columns (the CURATED COFs export carries a dozen bookkeeping
/// ones) are ignored.
pub fn load_csv(path: &Path) -> Result<CofDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "csv" {
        bail!("Unsupported file extension: .{ext} (expected .csv)");
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<CofRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    if records.is_empty() {
        bail!("CSV {} contains no data rows", path.display());
    }

    Ok(CofDataset::new(records))
}
