/// Data layer: core types, loading, filtering, and export.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → CofDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ CofDataset  │  Vec<CofRecord>
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply six threshold predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  filtered subset → .csv / .json
///   └──────────┘
/// ```
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
