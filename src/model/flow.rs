use serde::{Deserialize, Serialize};
use std::fmt;

/// The complete, canonical definition of a workflow, ready for rendering.
/// This is the target structure for any custom editor-format conversion.
///
/// Every `*_id` field references the [`Catalog`](super::Catalog) by id. A
/// reference that does not resolve is rendered with a sentinel label, never
/// treated as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Flow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub status: FlowStatus,
    pub version: Option<String>,
    pub primary_domain_id: Option<String>,
    /// The services this flow declares itself to touch. Drives the topology
    /// graph and the interaction matrix. Deliberately independent of the
    /// services referenced by individual steps.
    pub involved_service_ids: Vec<String>,
    pub actor_ids: Vec<String>,
    pub entry_point: Option<String>,
    pub trigger: Option<String>,
    pub tags: Vec<String>,
    pub steps: Vec<Step>,
    pub interactions: Vec<ServiceInteraction>,
    /// Coarser legacy integration records. Rendered alongside `interactions`
    /// when both are present.
    pub integrations: Vec<Integration>,
    pub business_rules: Vec<String>,
    pub error_scenarios: Vec<ErrorScenario>,
    pub performance_requirements: Vec<PerformanceRequirement>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
            Priority::Critical => write!(f, "Critical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStatus {
    Draft,
    Review,
    Approved,
    Deprecated,
}

impl Default for FlowStatus {
    fn default() -> Self {
        FlowStatus::Draft
    }
}

impl fmt::Display for FlowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowStatus::Draft => write!(f, "Draft"),
            FlowStatus::Review => write!(f, "Review"),
            FlowStatus::Approved => write!(f, "Approved"),
            FlowStatus::Deprecated => write!(f, "Deprecated"),
        }
    }
}

/// One step of a workflow.
///
/// Sequence numbers are 1-based and assumed contiguous; the engine renders
/// them as given and never renumbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub sequence: u32,
    pub actor_id: String,
    pub action: String,
    pub service_ids: Vec<String>,
    pub communication_type_id: Option<String>,
    pub input: Option<DataSpec>,
    pub output: Option<DataSpec>,
    /// Present exactly when this step is a decision point.
    pub decision: Option<Decision>,
    pub notifications: Vec<String>,
    pub duration: Option<String>,
    pub sla: Option<String>,
    pub error_handling: Option<String>,
}

/// A description of data entering or leaving a step, with an optional schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSpec {
    pub description: String,
    pub schema: Option<String>,
}

/// The branching criterion of a decision step and its named continuation paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub criteria: String,
    pub paths: Vec<ConditionalPath>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalPath {
    pub condition: String,
    pub outcome: Option<String>,
}

/// A detailed, typed record of one service calling another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInteraction {
    pub from_service_id: String,
    pub to_service_id: String,
    pub kind: InteractionKind,
    pub method: Option<String>,
    pub endpoint: Option<String>,
    pub data_format: Option<String>,
    pub data: Option<String>,
    pub frequency: Option<String>,
    pub latency: Option<String>,
    pub auth: Option<String>,
    pub error_handling: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionKind {
    Synchronous,
    Asynchronous,
    EventDriven,
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionKind::Synchronous => write!(f, "Synchronous"),
            InteractionKind::Asynchronous => write!(f, "Asynchronous"),
            InteractionKind::EventDriven => write!(f, "Event-Driven"),
        }
    }
}

/// The legacy, coarser form of a service-to-service link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integration {
    pub from_service_id: String,
    pub to_service_id: String,
    pub integration_type_id: Option<String>,
    pub data: Option<String>,
    pub frequency: Option<String>,
}

/// A failure case and how the workflow handles it. Rendered verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorScenario {
    pub scenario: String,
    pub handling: Option<String>,
}

/// A performance expectation. Rendered verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRequirement {
    pub metric: String,
    pub target: String,
}
