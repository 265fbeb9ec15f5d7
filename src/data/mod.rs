/// Data layer: core types, loading, matching, and classification.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record> (raw, code, description)
///   └──────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │  matcher  │      │ classify  │  prefix counts / range lookup
///   └──────────┘      └──────────┘
///                           │
///                           ▼
///                      ┌──────────┐
///                      │  export   │  matching rows → CSV
///                      └──────────┘
/// ```
pub mod classify;
pub mod export;
pub mod loader;
pub mod matcher;
pub mod model;
