//! Core data types for the scheduling engine.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::ScheduleConfig;

/// Workflow category of a task.
///
/// Categories drive the synthesizer's workflow ordering; the CPM passes
/// never look at them. `Other` is the bucket for anything the workflow
/// tables do not recognize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskCategory {
    BuyerPlanning,
    BuyerSearching,
    BuyerFinancing,
    AgentClientManagement,
    AgentMarketing,
    SolicitorSearches,
    SolicitorContracts,
    DeveloperConstruction,
    DeveloperSales,
    Other,
}

/// Role of the party responsible for a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskRole {
    Buyer,
    Agent,
    Solicitor,
    Developer,
    Admin,
}

/// Task priority, carried through for downstream consumers.
///
/// Not an input to the timing math: criticality is determined by slack,
/// not by this field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// Complexity level, the last-resort duration source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
    Expert,
}

/// Precedence relation between two tasks.
///
/// Only `FinishToStart` participates in the CPM passes. The other kinds
/// are accepted in the data model and surfaced as diagnostics by
/// `validate_graph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    FinishToStart,
    StartToStart,
    FinishToFinish,
    StartToFinish,
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DependencyKind::FinishToStart => write!(f, "finish_to_start"),
            DependencyKind::StartToStart => write!(f, "start_to_start"),
            DependencyKind::FinishToFinish => write!(f, "finish_to_finish"),
            DependencyKind::StartToFinish => write!(f, "start_to_finish"),
        }
    }
}

/// A task to be scheduled.
#[derive(Clone, Debug)]
pub struct Task {
    pub id: String,
    /// Explicit duration estimate in days, if the caller modeled one.
    pub estimated_duration: Option<f64>,
    pub actual_start: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub complexity: Option<ComplexityLevel>,
    pub category: TaskCategory,
    pub assigned_role: TaskRole,
    pub created_at: NaiveDateTime,
    pub is_legal_requirement: bool,
    pub priority: TaskPriority,
}

impl Task {
    /// Create a task with no duration sources set.
    pub fn new(
        id: impl Into<String>,
        category: TaskCategory,
        assigned_role: TaskRole,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            estimated_duration: None,
            actual_start: None,
            due_date: None,
            complexity: None,
            category,
            assigned_role,
            created_at,
            is_legal_requirement: false,
            priority: TaskPriority::Medium,
        }
    }

    /// Resolve the task's duration in days.
    ///
    /// Exactly one source is used, in priority order: the explicit
    /// estimate, the actual-start/due-date window, then the complexity
    /// table. Tasks with none of the three fall back to
    /// `config.default_duration_days`.
    pub fn duration_days(&self, config: &ScheduleConfig) -> f64 {
        if let Some(estimate) = self.estimated_duration {
            return estimate;
        }
        if let (Some(start), Some(due)) = (self.actual_start, self.due_date) {
            return (due - start).num_days() as f64;
        }
        match self.complexity {
            Some(ComplexityLevel::Simple) => 1.0,
            Some(ComplexityLevel::Moderate) => 3.0,
            Some(ComplexityLevel::Complex) => 7.0,
            Some(ComplexityLevel::Expert) => 14.0,
            None => config.default_duration_days,
        }
    }
}

/// A precedence edge between two tasks, with optional lag time.
#[derive(Clone, Debug)]
pub struct Dependency {
    pub id: String,
    pub source_task_id: String,
    pub target_task_id: String,
    pub kind: DependencyKind,
    pub lag_days: f64,
}

impl Dependency {
    /// Finish-to-start edge, the only kind the passes honor.
    pub fn finish_to_start(
        id: impl Into<String>,
        source_task_id: impl Into<String>,
        target_task_id: impl Into<String>,
        lag_days: f64,
    ) -> Self {
        Self {
            id: id.into(),
            source_task_id: source_task_id.into(),
            target_task_id: target_task_id.into(),
            kind: DependencyKind::FinishToStart,
            lag_days,
        }
    }
}
