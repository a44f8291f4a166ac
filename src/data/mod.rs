/// Data layer: core types, loading, and grouping.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, read-only
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  group    │  fold records → per-key counts
///   └──────────┘
/// ```

pub mod group;
pub mod loader;
pub mod model;
