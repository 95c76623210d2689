//! Critical-path scheduling core for property-transaction task networks.
//!
//! Two entry points mirror the consuming application's flow:
//! - [`synthesize_dependencies`] infers a conservative precedence graph
//!   from task metadata, for callers that have not modeled explicit
//!   dependency edges.
//! - [`compute_critical_path`] runs the classical two-pass Critical Path
//!   Method over tasks and finish-to-start dependencies, producing
//!   early/late timings, slack, the critical task set, and the total
//!   project duration.
//!
//! A third, [`validate_graph`], reports structural problems (dangling
//! references, edge kinds the passes ignore, cycles) without computing
//! anything, so callers can warn instead of charting a misleading
//! schedule.
//!
//! All computation is synchronous and pure: inputs are borrowed slices,
//! results are owned values, nothing is cached between calls.

mod config;
pub mod critical_path;
mod graph;
mod interner;
pub mod logging;
mod models;
pub mod synthesis;
pub mod validate;

pub use config::ScheduleConfig;
pub use critical_path::{compute_critical_path, CriticalPathResult, ScheduleError, TaskTiming};
pub use models::{
    ComplexityLevel, Dependency, DependencyKind, Task, TaskCategory, TaskPriority, TaskRole,
};
pub use synthesis::synthesize_dependencies;
pub use validate::{validate_graph, DanglingEdge, GraphDiagnostics};
