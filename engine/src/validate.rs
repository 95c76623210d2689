//! Structural validation of a task/dependency graph.
//!
//! A non-failing pre-pass callers can run before scheduling. The engine
//! itself skips dangling references silently and only errors on cycles;
//! this module names the problems instead, so a caller can surface them
//! rather than chart a misleading schedule.

use rustc_hash::FxHashSet;

use crate::config::ScheduleConfig;
use crate::graph::TaskGraph;
use crate::models::{Dependency, DependencyKind, Task};

/// An edge referencing at least one task ID absent from the task set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingEdge {
    pub edge_id: String,
    pub missing_source: bool,
    pub missing_target: bool,
}

/// Diagnostics from a validation pass.
#[derive(Clone, Debug, Default)]
pub struct GraphDiagnostics {
    /// Edges whose source and/or target task does not exist.
    pub dangling_edges: Vec<DanglingEdge>,
    /// IDs of edges whose kind the passes do not honor.
    pub ignored_edges: Vec<String>,
    pub has_cycle: bool,
    /// Tasks that participate in, or sit downstream of, a cycle.
    pub unordered_task_ids: Vec<String>,
}

impl GraphDiagnostics {
    /// Whether the graph can be scheduled at all. Dangling and ignored
    /// edges degrade the schedule but do not block it; a cycle does.
    pub fn is_schedulable(&self) -> bool {
        !self.has_cycle
    }
}

/// Inspect a task/dependency graph without computing any timings.
pub fn validate_graph(tasks: &[Task], dependencies: &[Dependency]) -> GraphDiagnostics {
    let known: FxHashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

    let mut dangling_edges: Vec<DanglingEdge> = Vec::new();
    let mut ignored_edges: Vec<String> = Vec::new();

    for dep in dependencies {
        let missing_source = !known.contains(dep.source_task_id.as_str());
        let missing_target = !known.contains(dep.target_task_id.as_str());
        if missing_source || missing_target {
            dangling_edges.push(DanglingEdge {
                edge_id: dep.id.clone(),
                missing_source,
                missing_target,
            });
        }
        if dep.kind != DependencyKind::FinishToStart {
            ignored_edges.push(dep.id.clone());
        }
    }

    // Durations are irrelevant to structure; a default config suffices.
    let graph = TaskGraph::build(tasks, dependencies, &ScheduleConfig::default());
    let order = graph.kahn_order();

    let mut placed = vec![false; graph.len()];
    for &id in &order {
        placed[id as usize] = true;
    }

    let mut unordered_task_ids: Vec<String> = Vec::new();
    for task in tasks {
        if let Some(id) = graph.interner.get(&task.id) {
            if !placed[id as usize] {
                placed[id as usize] = true;
                unordered_task_ids.push(task.id.clone());
            }
        }
    }

    GraphDiagnostics {
        dangling_edges,
        ignored_edges,
        has_cycle: !unordered_task_ids.is_empty(),
        unordered_task_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskCategory, TaskRole};
    use chrono::NaiveDate;

    fn make_task(id: &str) -> Task {
        Task::new(
            id,
            TaskCategory::Other,
            TaskRole::Admin,
            NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        )
    }

    fn fs(id: &str, source: &str, target: &str) -> Dependency {
        Dependency::finish_to_start(id, source, target, 0.0)
    }

    #[test]
    fn test_clean_graph() {
        let tasks = vec![make_task("a"), make_task("b")];
        let deps = vec![fs("d1", "a", "b")];
        let diagnostics = validate_graph(&tasks, &deps);

        assert!(diagnostics.dangling_edges.is_empty());
        assert!(diagnostics.ignored_edges.is_empty());
        assert!(!diagnostics.has_cycle);
        assert!(diagnostics.is_schedulable());
    }

    #[test]
    fn test_dangling_edge_endpoints_flagged() {
        let tasks = vec![make_task("a")];
        let deps = vec![fs("d1", "ghost", "a"), fs("d2", "a", "phantom")];
        let diagnostics = validate_graph(&tasks, &deps);

        assert_eq!(
            diagnostics.dangling_edges,
            vec![
                DanglingEdge {
                    edge_id: "d1".to_string(),
                    missing_source: true,
                    missing_target: false,
                },
                DanglingEdge {
                    edge_id: "d2".to_string(),
                    missing_source: false,
                    missing_target: true,
                },
            ]
        );
        // Still schedulable, just degraded.
        assert!(diagnostics.is_schedulable());
    }

    #[test]
    fn test_ignored_edge_kinds_listed() {
        let tasks = vec![make_task("a"), make_task("b")];
        let deps = vec![
            fs("d1", "a", "b"),
            Dependency {
                id: "d2".to_string(),
                source_task_id: "a".to_string(),
                target_task_id: "b".to_string(),
                kind: DependencyKind::StartToStart,
                lag_days: 0.0,
            },
        ];
        let diagnostics = validate_graph(&tasks, &deps);

        assert_eq!(diagnostics.ignored_edges, vec!["d2"]);
        assert!(diagnostics.dangling_edges.is_empty());
    }

    #[test]
    fn test_cycle_names_participants() {
        let tasks = vec![make_task("a"), make_task("b"), make_task("c")];
        let deps = vec![fs("d1", "a", "b"), fs("d2", "b", "a")];
        let diagnostics = validate_graph(&tasks, &deps);

        assert!(diagnostics.has_cycle);
        assert!(!diagnostics.is_schedulable());
        assert_eq!(diagnostics.unordered_task_ids, vec!["a", "b"]);
    }

    #[test]
    fn test_downstream_of_cycle_reported() {
        let tasks = vec![make_task("a"), make_task("b"), make_task("c")];
        let deps = vec![
            fs("d1", "a", "b"),
            fs("d2", "b", "a"),
            fs("d3", "b", "c"),
        ];
        let diagnostics = validate_graph(&tasks, &deps);

        assert!(diagnostics.has_cycle);
        assert_eq!(diagnostics.unordered_task_ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_graph_schedulable() {
        let diagnostics = validate_graph(&[], &[]);
        assert!(diagnostics.is_schedulable());
        assert!(diagnostics.unordered_task_ids.is_empty());
    }
}
