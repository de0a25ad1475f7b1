use crate::data::filter::{filtered_indices, filtered_records};
use crate::data::model::{CofDataset, CofRecord};
use crate::params::{ThresholdParams, Thresholds};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// This is the only mutable state in the application; the Filter Engine
/// itself is pure.  `visible_indices` is always the result of applying
/// `thresholds` to `dataset` (no hidden state between recomputations).
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<CofDataset>,

    /// The six threshold controls as shown in the side panel.
    pub params: ThresholdParams,

    /// Last successfully resolved thresholds.  Kept when a custom field
    /// is mid-edit and invalid, so the views stay on the previous subset.
    pub thresholds: Thresholds,

    /// Indices of candidates passing the current thresholds (cached).
    pub visible_indices: Vec<usize>,

    /// Status / validation message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let params = ThresholdParams::default();
        // Defaults are all presets, so this cannot fail.
        let thresholds = params
            .resolve_all()
            .unwrap_or_else(|_| Thresholds::permissive());
        Self {
            dataset: None,
            params,
            thresholds,
            visible_indices: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and filter it with the current
    /// thresholds.
    pub fn set_dataset(&mut self, dataset: CofDataset) {
        self.visible_indices = filtered_indices(&dataset, &self.thresholds);
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after a parameter change.
    ///
    /// All six controls are resolved before anything is touched; if any
    /// custom field is invalid, the previous subset and thresholds are kept
    /// and the validation message is surfaced instead.
    pub fn refilter(&mut self) {
        match self.params.resolve_all() {
            Ok(thresholds) => {
                self.thresholds = thresholds;
                self.status_message = None;
                if let Some(ds) = &self.dataset {
                    self.visible_indices = filtered_indices(ds, &thresholds);
                }
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Clone the currently visible records, for export.
    pub fn filtered_records(&self) -> Vec<CofRecord> {
        match &self.dataset {
            Some(ds) => filtered_records(ds, &self.thresholds),
            None => Vec::new(),
        }
    }

    /// Plot title reflecting the active redox pair.
    pub fn plot_title(&self) -> String {
        format!(
            "Filtered CURATED COFs for photocatalytic {}/{}",
            self.params.reduction.display_name(),
            self.params.oxidation.display_name()
        )
    }
}
