//! Interned adjacency representation of a task network.
//!
//! The passes index everything by dense integer IDs built from the
//! caller's task list. Edges of kinds other than finish-to-start and
//! edges referencing unknown tasks never enter the adjacency lists.

use std::collections::VecDeque;

use crate::config::ScheduleConfig;
use crate::interner::{TaskId, TaskIdInterner};
use crate::models::{Dependency, DependencyKind, Task};

/// Task network with pre-resolved durations and adjacency lists.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    pub interner: TaskIdInterner,
    /// Resolved durations indexed by task ID.
    pub durations: Vec<f64>,
    /// Predecessor edges as (pred, lag) pairs, indexed by task ID.
    pub preds: Vec<Vec<(TaskId, f64)>>,
    /// Successor edges as (succ, lag) pairs, indexed by task ID.
    pub succs: Vec<Vec<(TaskId, f64)>>,
}

impl TaskGraph {
    /// Build the network from the caller's task and dependency slices.
    pub fn build(tasks: &[Task], dependencies: &[Dependency], config: &ScheduleConfig) -> Self {
        let mut interner = TaskIdInterner::with_capacity(tasks.len());
        let mut durations: Vec<f64> = Vec::with_capacity(tasks.len());

        for task in tasks {
            let id = interner.intern(&task.id);
            let idx = id as usize;
            // Duplicate task IDs collapse onto one node; last entry wins.
            if idx == durations.len() {
                durations.push(task.duration_days(config));
            } else {
                durations[idx] = task.duration_days(config);
            }
        }

        let n = durations.len();
        let mut preds: Vec<Vec<(TaskId, f64)>> = vec![Vec::new(); n];
        let mut succs: Vec<Vec<(TaskId, f64)>> = vec![Vec::new(); n];

        for dep in dependencies {
            if dep.kind != DependencyKind::FinishToStart {
                continue;
            }
            let (Some(source), Some(target)) = (
                interner.get(&dep.source_task_id),
                interner.get(&dep.target_task_id),
            ) else {
                continue;
            };
            preds[target as usize].push((source, dep.lag_days));
            succs[source as usize].push((target, dep.lag_days));
        }

        Self {
            interner,
            durations,
            preds,
            succs,
        }
    }

    /// Number of tasks in the network.
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Topological order via Kahn's algorithm.
    ///
    /// Returns every task that could be placed, dependencies before
    /// dependents. An order shorter than `len()` means the remaining
    /// tasks participate in or sit downstream of a cycle.
    pub fn kahn_order(&self) -> Vec<TaskId> {
        let n = self.len();
        let mut in_degree: Vec<usize> = self.preds.iter().map(|p| p.len()).collect();

        let mut queue: VecDeque<TaskId> = (0..n as TaskId)
            .filter(|&id| in_degree[id as usize] == 0)
            .collect();

        let mut order: Vec<TaskId> = Vec::with_capacity(n);
        while let Some(task) = queue.pop_front() {
            order.push(task);
            for &(succ, _) in &self.succs[task as usize] {
                let idx = succ as usize;
                in_degree[idx] -= 1;
                if in_degree[idx] == 0 {
                    queue.push_back(succ);
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskCategory, TaskRole};
    use chrono::NaiveDate;

    fn make_task(id: &str, duration: f64) -> Task {
        let mut task = Task::new(
            id,
            TaskCategory::Other,
            TaskRole::Admin,
            NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        );
        task.estimated_duration = Some(duration);
        task
    }

    #[test]
    fn test_build_filters_edge_kinds() {
        let tasks = vec![make_task("a", 1.0), make_task("b", 2.0)];
        let deps = vec![
            Dependency::finish_to_start("d1", "a", "b", 0.0),
            Dependency {
                id: "d2".to_string(),
                source_task_id: "a".to_string(),
                target_task_id: "b".to_string(),
                kind: DependencyKind::StartToStart,
                lag_days: 0.0,
            },
        ];
        let graph = TaskGraph::build(&tasks, &deps, &ScheduleConfig::default());

        let b = graph.interner.get("b").unwrap();
        assert_eq!(graph.preds[b as usize].len(), 1);
    }

    #[test]
    fn test_build_skips_dangling_edges() {
        let tasks = vec![make_task("a", 1.0)];
        let deps = vec![
            Dependency::finish_to_start("d1", "a", "ghost", 0.0),
            Dependency::finish_to_start("d2", "ghost", "a", 0.0),
        ];
        let graph = TaskGraph::build(&tasks, &deps, &ScheduleConfig::default());

        let a = graph.interner.get("a").unwrap();
        assert!(graph.preds[a as usize].is_empty());
        assert!(graph.succs[a as usize].is_empty());
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_kahn_order_respects_dependencies() {
        let tasks = vec![make_task("a", 1.0), make_task("b", 1.0), make_task("c", 1.0)];
        let deps = vec![
            Dependency::finish_to_start("d1", "a", "b", 0.0),
            Dependency::finish_to_start("d2", "b", "c", 0.0),
        ];
        let graph = TaskGraph::build(&tasks, &deps, &ScheduleConfig::default());
        let order = graph.kahn_order();

        assert_eq!(order.len(), 3);
        let pos = |name: &str| {
            let id = graph.interner.get(name).unwrap();
            order.iter().position(|&t| t == id).unwrap()
        };
        assert!(pos("a") < pos("b"));
        assert!(pos("b") < pos("c"));
    }

    #[test]
    fn test_kahn_order_short_on_cycle() {
        let tasks = vec![make_task("a", 1.0), make_task("b", 1.0), make_task("c", 1.0)];
        let deps = vec![
            Dependency::finish_to_start("d1", "a", "b", 0.0),
            Dependency::finish_to_start("d2", "b", "a", 0.0),
        ];
        let graph = TaskGraph::build(&tasks, &deps, &ScheduleConfig::default());
        let order = graph.kahn_order();

        // c is placeable, the a/b cycle is not
        assert_eq!(order.len(), 1);
        assert_eq!(graph.interner.resolve(order[0]), Some("c"));
    }
}
