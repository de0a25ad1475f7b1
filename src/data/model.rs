use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CofRecord – one candidate material (one row of the source CSV)
// ---------------------------------------------------------------------------

/// A single COF candidate with the descriptors used for screening.
///
/// Serde renames map the fields onto the column names of the CURATED COFs
/// export, so the same struct drives both loading and the filtered-subset
/// download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CofRecord {
    /// CURATED COF identifier.
    pub label: String,
    /// Adjusted band gap [eV].
    #[serde(rename = "bandgap_corr")]
    pub band_gap: f64,
    /// Adjusted HOMO alignment w.r.t. vacuum [eV].
    #[serde(rename = "homo_align_corr")]
    pub homo_align: f64,
    /// Adjusted LUMO alignment w.r.t. vacuum [eV].
    #[serde(rename = "lumo_align_corr")]
    pub lumo_align: f64,
    /// Electron effective mass [m/me].
    #[serde(rename = "effective_mass_electron")]
    pub electron_mass: f64,
    /// Hole effective mass [m/me].
    #[serde(rename = "effective_mass_hole")]
    pub hole_mass: f64,
    /// Charge recombination descriptor, 0–1.
    #[serde(rename = "spatial_overlap_corr")]
    pub spatial_overlap: f64,
}

// ---------------------------------------------------------------------------
// CofDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset.
#[derive(Debug, Clone, Default)]
pub struct CofDataset {
    /// All candidate records (rows).
    pub records: Vec<CofRecord>,
}

impl CofDataset {
    pub fn new(records: Vec<CofRecord>) -> Self {
        CofDataset { records }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
