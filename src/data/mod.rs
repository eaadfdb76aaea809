/// Data layer: the dielectric grid, loading, and column sampling.
///
/// Architecture:
/// ```text
///  .png / .jpg
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode grayscale → DielectricMap
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ DielectricMap │  H×W grid of f64 in [1.0, 10.0]
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  trace    │  sample one column → normalized signal vs. depth
///   └──────────┘
/// ```

pub mod loader;
pub mod map;
pub mod trace;
