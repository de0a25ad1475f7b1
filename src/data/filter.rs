use crate::params::Thresholds;

use super::model::{CofDataset, CofRecord};

// ---------------------------------------------------------------------------
// Filter Engine: six conjunctive strict inequalities
// ---------------------------------------------------------------------------

/// Whether a record survives the screening.
///
/// A candidate passes when, simultaneously:
/// * its band gap is below the ceiling (absorbs the targeted light),
/// * its HOMO lies below the oxidation level and its LUMO above the
///   reduction level (straddles the redox pair),
/// * both effective masses are below their ceilings (mobile carriers),
/// * its spatial overlap is below the ceiling (low recombination).
///
/// All comparisons are strict; boundary values are excluded.
pub fn matches(record: &CofRecord, t: &Thresholds) -> bool {
    record.band_gap < t.band_gap_max
        && record.homo_align < t.oxidation
        && record.lumo_align > t.reduction
        && record.electron_mass < t.electron_mass_max
        && record.hole_mass < t.hole_mass_max
        && record.spatial_overlap < t.overlap_max
}

/// Return indices of records that pass all six thresholds.
///
/// Recomputed wholesale on every call; the result is a pure function of the
/// dataset and the thresholds.
pub fn filtered_indices(dataset: &CofDataset, t: &Thresholds) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| matches(rec, t))
        .map(|(i, _)| i)
        .collect()
}

/// Clone the passing records, for export.
pub fn filtered_records(dataset: &CofDataset, t: &Thresholds) -> Vec<CofRecord> {
    dataset
        .records
        .iter()
        .filter(|rec| matches(rec, t))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{HER, OER, VIS_E};

    fn record(
        band_gap: f64,
        homo: f64,
        lumo: f64,
        me: f64,
        mh: f64,
        overlap: f64,
    ) -> CofRecord {
        CofRecord {
            label: "COF-test".to_string(),
            band_gap,
            homo_align: homo,
            lumo_align: lumo,
            electron_mass: me,
            hole_mass: mh,
            spatial_overlap: overlap,
        }
    }

    fn default_thresholds() -> Thresholds {
        Thresholds {
            oxidation: OER,
            reduction: HER,
            band_gap_max: VIS_E,
            electron_mass_max: 10.0,
            hole_mass_max: 10.0,
            overlap_max: 0.50,
        }
    }

    #[test]
    fn straddling_candidate_passes() {
        // HOMO below OER (-5.629), LUMO above HER (-4.4), everything under
        // its ceiling.
        let rec = record(2.0, -5.8, -3.8, 5.0, 5.0, 0.3);
        assert!(matches(&rec, &default_thresholds()));
    }

    #[test]
    fn each_inequality_is_necessary() {
        let t = default_thresholds();
        let good = record(2.0, -5.8, -3.8, 5.0, 5.0, 0.3);
        assert!(matches(&good, &t));

        let mut rec = good.clone();
        rec.band_gap = 3.5;
        assert!(!matches(&rec, &t));

        let mut rec = good.clone();
        rec.homo_align = -5.0; // above the oxidation level
        assert!(!matches(&rec, &t));

        let mut rec = good.clone();
        rec.lumo_align = -4.6; // below the reduction level
        assert!(!matches(&rec, &t));

        let mut rec = good.clone();
        rec.electron_mass = 12.0;
        assert!(!matches(&rec, &t));

        let mut rec = good.clone();
        rec.hole_mass = 50.0;
        assert!(!matches(&rec, &t));

        let mut rec = good.clone();
        rec.spatial_overlap = 0.9;
        assert!(!matches(&rec, &t));
    }

    #[test]
    fn boundary_values_are_excluded() {
        let t = default_thresholds();

        let mut rec = record(2.0, -5.8, -3.8, 5.0, 5.0, 0.3);
        rec.band_gap = VIS_E;
        assert!(!matches(&rec, &t));

        let mut rec = record(2.0, -5.8, -3.8, 5.0, 5.0, 0.3);
        rec.homo_align = OER;
        assert!(!matches(&rec, &t));

        let mut rec = record(2.0, -5.8, -3.8, 5.0, 5.0, 0.3);
        rec.lumo_align = HER;
        assert!(!matches(&rec, &t));

        let mut rec = record(2.0, -5.8, -3.8, 5.0, 5.0, 0.3);
        rec.spatial_overlap = 0.50;
        assert!(!matches(&rec, &t));
    }

    #[test]
    fn permissive_thresholds_keep_everything() {
        let dataset = CofDataset::new(vec![
            record(2.0, -5.8, -3.8, 5.0, 5.0, 0.3),
            record(4.9, -4.1, -6.0, 300.0, 0.1, 0.99),
            record(0.1, 0.0, 0.0, 1.0, 1.0, 0.0),
        ]);
        let indices = filtered_indices(&dataset, &Thresholds::permissive());
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn indices_and_records_agree() {
        let dataset = CofDataset::new(vec![
            record(2.0, -5.8, -3.8, 5.0, 5.0, 0.3),
            record(2.0, -5.0, -3.8, 5.0, 5.0, 0.3), // fails oxidation
            record(2.5, -6.0, -4.0, 8.0, 8.0, 0.1),
        ]);
        let t = default_thresholds();
        let indices = filtered_indices(&dataset, &t);
        let records = filtered_records(&dataset, &t);
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], dataset.records[2]);
    }
}
