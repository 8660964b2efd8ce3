/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  spacex_launch_dash.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (+ payload bounds)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, distinct sites/categories
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  aggregate outcomes / apply payload range
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
