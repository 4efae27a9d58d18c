/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet  (file or URL)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse table → resolve columns → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<LaunchRecord>, payload bounds, site list
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site / payload predicates → borrowed views
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;

#[cfg(test)]
pub mod fixtures;
