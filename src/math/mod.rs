/// Math layer: expression compilation, sampling, and derivative estimation.
///
/// Architecture:
/// ```text
///   equation text
///        │
///        ▼
///   ┌──────────┐
///   │   expr    │  meval compile + variable binding → Fn(f64) -> f64
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  sample   │  sweep domain → Vec<[x, y]> / SampleGrid
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ derivative  │  finite differences → Vec<[x̄, dy/dx]>
///   └────────────┘
/// ```

pub mod derivative;
pub mod expr;
pub mod sample;
