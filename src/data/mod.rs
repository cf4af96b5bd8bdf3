/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  asylum_seekers_final.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → AsylumDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ AsylumDataset │  Vec<AsylumRecord>, distinct-value indices
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐       ┌────────────┐
///   │  filter   │ ───▶ │ aggregate   │  KPIs, trends, rankings
///   └──────────┘       └────────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
