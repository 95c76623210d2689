//! Critical path calculation using forward and backward passes.
//!
//! Classical two-pass CPM over a finish-to-start precedence graph:
//! the forward pass computes earliest start/finish times, the backward
//! pass latest start/finish times, and slack falls out as the gap
//! between the two. Tasks whose slack sits inside the configured
//! tolerance band form the critical path.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::config::ScheduleConfig;
use crate::graph::TaskGraph;
use crate::models::{Dependency, Task};
use crate::{log_pass, log_task};

/// Errors that can occur during critical path computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Circular dependency detected in task graph")]
    CircularDependency,
}

/// Per-task timing information from the two passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskTiming {
    /// Earliest possible start, in days from project start.
    pub early_start: f64,
    /// Earliest possible finish.
    pub early_finish: f64,
    /// Latest allowable start.
    pub late_start: f64,
    /// Latest allowable finish.
    pub late_finish: f64,
    /// Slack = late_start - early_start.
    pub slack: f64,
}

/// Result of a critical path computation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CriticalPathResult {
    /// Full timing table, keyed by task ID.
    pub timings: FxHashMap<String, TaskTiming>,
    /// Slack per task, keyed by task ID.
    pub slack_times: FxHashMap<String, f64>,
    /// Tasks whose slack is within tolerance, in input task order.
    pub critical_task_ids: Vec<String>,
    /// Maximum early finish across all tasks; 0 for an empty network.
    pub project_duration: f64,
    /// Sum of all resolved task durations.
    pub total_work: f64,
}

/// Compute early/late timings, slack, and the critical path.
///
/// Only finish-to-start dependencies participate; lag shifts the
/// successor in the forward pass and the predecessor's allowance in the
/// backward pass. Edges referencing unknown task IDs contribute nothing.
/// Sink tasks are pinned to their own early finish, not the global
/// project end, so every terminal chain carries its own deadline.
///
/// # Errors
/// `ScheduleError::CircularDependency` if the dependency graph has a
/// cycle among the honored edges.
pub fn compute_critical_path(
    tasks: &[Task],
    dependencies: &[Dependency],
    config: &ScheduleConfig,
) -> Result<CriticalPathResult, ScheduleError> {
    let graph = TaskGraph::build(tasks, dependencies, config);
    let n = graph.len();
    if n == 0 {
        return Ok(CriticalPathResult::default());
    }

    let order = graph.kahn_order();
    if order.len() != n {
        return Err(ScheduleError::CircularDependency);
    }

    // Forward pass: earliest start is the latest predecessor finish
    // (plus lag), zero for entry tasks.
    let mut early_start = vec![0.0_f64; n];
    let mut early_finish = vec![0.0_f64; n];
    let mut total_work = 0.0;

    for &task in &order {
        let idx = task as usize;
        let mut es = 0.0_f64;
        for &(pred, lag) in &graph.preds[idx] {
            es = es.max(early_finish[pred as usize] + lag);
        }
        early_start[idx] = es;
        early_finish[idx] = es + graph.durations[idx];
        total_work += graph.durations[idx];

        log_task!(
            config.verbosity,
            "forward: {} es={:.2} ef={:.2}",
            graph.interner.resolve(task).unwrap_or("?"),
            early_start[idx],
            early_finish[idx]
        );
    }

    let project_duration = early_finish.iter().copied().fold(0.0_f64, f64::max);
    log_pass!(
        config.verbosity,
        "forward pass complete: project duration {:.2} days over {} tasks",
        project_duration,
        n
    );

    // Backward pass in reverse topological order. Sinks pin to their own
    // early finish; everything else takes the tightest successor window.
    let mut late_start = vec![0.0_f64; n];
    let mut late_finish = vec![0.0_f64; n];

    for &task in order.iter().rev() {
        let idx = task as usize;
        let lf = if graph.succs[idx].is_empty() {
            log_task!(
                config.verbosity,
                "backward: {} is a sink, pinned at {:.2}",
                graph.interner.resolve(task).unwrap_or("?"),
                early_finish[idx]
            );
            early_finish[idx]
        } else {
            let mut lf = f64::MAX;
            for &(succ, lag) in &graph.succs[idx] {
                lf = lf.min(late_start[succ as usize] - lag);
            }
            lf
        };
        late_finish[idx] = lf;
        late_start[idx] = lf - graph.durations[idx];
    }

    // Slack and the critical set, reported in the caller's task order.
    let mut timings: FxHashMap<String, TaskTiming> =
        FxHashMap::with_capacity_and_hasher(n, Default::default());
    let mut slack_times: FxHashMap<String, f64> =
        FxHashMap::with_capacity_and_hasher(n, Default::default());
    let mut critical_task_ids: Vec<String> = Vec::new();
    let mut reported = vec![false; n];

    for task in tasks {
        let Some(id) = graph.interner.get(&task.id) else {
            continue;
        };
        let idx = id as usize;
        // Duplicate caller IDs collapse onto one node; report it once.
        if reported[idx] {
            continue;
        }
        reported[idx] = true;

        let slack = late_start[idx] - early_start[idx];
        timings.insert(
            task.id.clone(),
            TaskTiming {
                early_start: early_start[idx],
                early_finish: early_finish[idx],
                late_start: late_start[idx],
                late_finish: late_finish[idx],
                slack,
            },
        );
        slack_times.insert(task.id.clone(), slack);
        if slack <= config.critical_slack_tolerance {
            critical_task_ids.push(task.id.clone());
        }
    }

    log_pass!(
        config.verbosity,
        "critical path: {} of {} tasks critical",
        critical_task_ids.len(),
        n
    );

    Ok(CriticalPathResult {
        timings,
        slack_times,
        critical_task_ids,
        project_duration,
        total_work,
    })
}
