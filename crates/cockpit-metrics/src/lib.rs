//! Aggregate metrics over a selected set of projects.
//!
//! The calculator is pure: it maps the selected projects' normalized data to
//! a fixed set of counters and never touches I/O or external state. Metrics
//! are recomputed on every request and never persisted.

use serde::Serialize;

use cockpit_models::casefold::eq_fold;
use cockpit_models::{Project, TargetTypes, WorkItem};

/// Derived summary counters over a project selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateMetrics {
    /// Number of selected projects.
    pub project_count: usize,
    /// Completion ratio over all milestones, 0.0–1.0. An empty milestone
    /// set is vacuously complete (1.0).
    pub milestone_completion: f64,
    /// Milestones with priority "high".
    pub high_priority_milestones: usize,
    /// Deliverables with priority "high".
    pub high_priority_deliverables: usize,
    /// Offers whose status is anything but "closed".
    pub open_offers: usize,
}

/// Computes the aggregate metrics for a project selection.
pub fn aggregate(projects: &[Project], types: &TargetTypes) -> AggregateMetrics {
    let milestones = filter_by_type(projects, &types.milestone);
    let deliverables = filter_by_type(projects, &types.deliverable);

    let open_offers = projects
        .iter()
        .flat_map(|project| project.offers.iter())
        .filter(|offer| !eq_fold(&offer.status, "closed"))
        .count();

    AggregateMetrics {
        project_count: projects.len(),
        milestone_completion: completion_ratio(&milestones),
        high_priority_milestones: high_priority_count(&milestones),
        high_priority_deliverables: high_priority_count(&deliverables),
        open_offers,
    }
}

/// All work items across the selection whose type matches the given label.
fn filter_by_type<'a>(projects: &'a [Project], type_name: &str) -> Vec<&'a WorkItem> {
    projects
        .iter()
        .flat_map(|project| project.work_packages.iter())
        .filter(|item| eq_fold(&item.kind, type_name))
        .collect()
}

/// Share of items whose status reads as complete. Empty input is 1.0 by
/// policy: no milestones means nothing is outstanding.
fn completion_ratio(items: &[&WorkItem]) -> f64 {
    if items.is_empty() {
        return 1.0;
    }
    let done = items
        .iter()
        .filter(|item| eq_fold(&item.status, "closed") || eq_fold(&item.status, "done"))
        .count();
    done as f64 / items.len() as f64
}

fn high_priority_count(items: &[&WorkItem]) -> usize {
    items
        .iter()
        .filter(|item| eq_fold(&item.priority, "high"))
        .count()
}
