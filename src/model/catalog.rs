use serde::{Deserialize, Serialize};
use std::fmt;

/// The project-scoped registries: service domains, actors and integration types.
/// This is the lookup side of every render; the engine reads it, never edits it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub domains: Vec<ServiceDomain>,
    pub actors: Vec<Actor>,
    pub integration_types: Vec<IntegrationType>,
}

/// A named group of services, with an optional display color used by diagrams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDomain {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub services: Vec<Service>,
}

/// A single service registered inside a domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub datastore: Option<String>,
}

/// A participant in a workflow: a person, a scheduled job, or an outside system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub kind: ActorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    Human,
    Automated,
    External,
}

impl Default for ActorKind {
    fn default() -> Self {
        ActorKind::Human
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorKind::Human => write!(f, "Human"),
            ActorKind::Automated => write!(f, "Automated"),
            ActorKind::External => write!(f, "External"),
        }
    }
}

/// A registered kind of service-to-service communication, with the visual
/// conventions a diagram should use for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationType {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub style: LineStyle,
}

/// Visual conventions for drawing one integration type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineStyle {
    pub pattern: Option<String>,
    pub color: Option<String>,
    pub arrow: Option<String>,
}
