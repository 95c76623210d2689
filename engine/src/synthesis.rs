//! Dependency synthesis from task metadata.
//!
//! When the caller has not modeled explicit dependencies, the scheduler
//! still needs a precedence graph to chart. This module infers a
//! conservative one: adjacent-pair handoffs along the canonical
//! transaction workflow, plus fan-out edges from legal-requirement
//! tasks to the buyer tasks they gate. It is a heuristic default, not a
//! constraint solver.

use crate::models::{Dependency, Task, TaskCategory, TaskRole};

/// How many dependents a legal-requirement task fans out to.
const LEGAL_FANOUT_LIMIT: usize = 2;

/// Lag on legal-requirement edges, in days.
const LEGAL_LAG_DAYS: f64 = 1.0;

/// Position of a category in the canonical transaction workflow.
///
/// Lower ranks come first; unrecognized categories sort last.
fn workflow_rank(category: TaskCategory) -> u32 {
    match category {
        TaskCategory::BuyerPlanning => 1,
        TaskCategory::DeveloperConstruction => 1,
        TaskCategory::BuyerSearching => 2,
        TaskCategory::AgentClientManagement => 2,
        TaskCategory::AgentMarketing => 2,
        TaskCategory::BuyerFinancing => 3,
        TaskCategory::DeveloperSales => 3,
        TaskCategory::SolicitorSearches => 4,
        TaskCategory::SolicitorContracts => 5,
        TaskCategory::Other => 999,
    }
}

/// Whether `earlier` hands off to `later` when the two sit adjacent in
/// workflow order.
fn is_handoff(earlier: &Task, later: &Task) -> bool {
    use TaskCategory::*;

    let category_rule = matches!(
        (earlier.category, later.category),
        (BuyerPlanning, BuyerSearching)
            | (BuyerSearching, BuyerFinancing)
            | (BuyerFinancing, SolicitorSearches)
            | (SolicitorSearches, SolicitorContracts)
    );
    let role_rule = matches!(
        (earlier.assigned_role, later.assigned_role),
        (TaskRole::Agent, TaskRole::Solicitor) | (TaskRole::Developer, TaskRole::Agent)
    );

    category_rule || role_rule
}

/// Infer a plausible precedence graph for a task set with no explicit
/// dependencies.
///
/// Deterministic: the same task slice always yields the same edge list.
/// The walk is local and pairwise: only tasks adjacent in workflow-sorted
/// order are considered for handoff edges. Legal-requirement edges are
/// selected in input order, not sorted order. Duplicate edges are
/// possible and left as-is; the passes fold them harmlessly.
pub fn synthesize_dependencies(tasks: &[Task]) -> Vec<Dependency> {
    let mut dependencies: Vec<Dependency> = Vec::new();
    let mut next_id: u32 = 1;

    // Workflow view: rank first, creation time second; stable sort keeps
    // input order for full ties.
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by(|a, b| {
        workflow_rank(a.category)
            .cmp(&workflow_rank(b.category))
            .then(a.created_at.cmp(&b.created_at))
    });

    for pair in sorted.windows(2) {
        let (earlier, later) = (pair[0], pair[1]);
        if is_handoff(earlier, later) {
            dependencies.push(Dependency::finish_to_start(
                format!("dep_{next_id}"),
                earlier.id.clone(),
                later.id.clone(),
                0.0,
            ));
            next_id += 1;
        }
    }

    // Legal requirements gate later buyer tasks, with a day of
    // turnaround lag and a capped fan-out.
    for legal in tasks.iter().filter(|t| t.is_legal_requirement) {
        let dependents = tasks
            .iter()
            .filter(|t| {
                t.id != legal.id
                    && t.assigned_role == TaskRole::Buyer
                    && t.created_at > legal.created_at
            })
            .take(LEGAL_FANOUT_LIMIT);

        for dependent in dependents {
            dependencies.push(Dependency::finish_to_start(
                format!("dep_{next_id}"),
                legal.id.clone(),
                dependent.id.clone(),
                LEGAL_LAG_DAYS,
            ));
            next_id += 1;
        }
    }

    dependencies
}
