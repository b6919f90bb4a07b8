/// Data layer: core types and loading.
///
/// ```text
///  .xlsx / .csv template
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse bytes → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  rows: identifier, primary value, optional secondary
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
