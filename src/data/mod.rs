/// Data layer: the frame every chart reads, and row selection.
///
/// Architecture:
/// ```text
///   upstream finders (peaks, half peaks, continuum, troughs)
///        │
///        ▼
///   ┌───────────────┐
///   │ SpectralFrame  │  named, row-aligned columns (+ Derivative1st)
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  view window + category → surviving marker rows
///   └──────────┘
/// ```

pub mod filter;
pub mod model;
pub mod synthetic;
