//! Generate a deterministic sample COF dataset for trying out the viewer:
//!
//! ```sh
//! cargo run --bin generate_sample -- sample_cofs.csv
//! cargo run -- sample_cofs.csv
//! ```

use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform float in [0, 1).
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform float in [lo, hi).
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.uniform() * (hi - lo)
    }
}

#[derive(Serialize)]
struct SampleRow {
    label: String,
    bandgap_corr: f64,
    homo_align_corr: f64,
    lumo_align_corr: f64,
    effective_mass_electron: f64,
    effective_mass_hole: f64,
    spatial_overlap_corr: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_cofs.csv".to_string());

    let mut rng = SimpleRng::new(42);
    let mut wtr = csv::Writer::from_path(&path)?;

    let n = 250;
    for i in 0..n {
        // HOMO in a band around typical COF values; band gap sets the LUMO.
        let homo = rng.range(-7.0, -4.5);
        let band_gap = rng.range(0.8, 4.5);
        let lumo = homo + band_gap;

        let row = SampleRow {
            label: format!("{:05}N{}", i * 17 % 20000, i % 4 + 1),
            bandgap_corr: band_gap,
            homo_align_corr: homo,
            lumo_align_corr: lumo,
            effective_mass_electron: rng.range(0.2, 150.0),
            effective_mass_hole: rng.range(0.2, 150.0),
            spatial_overlap_corr: rng.range(0.0, 1.0),
        };
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    println!("Wrote {n} sample candidates to {path}");
    Ok(())
}
