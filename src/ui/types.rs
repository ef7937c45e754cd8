use crate::error::ModelConversionError;
use crate::model::{
    Actor, ActorKind, Catalog, ConditionalPath, DataSpec, Decision, ErrorScenario, Flow,
    FlowStatus, Integration, IntegrationType, InteractionKind, IntoCatalog, IntoFlow, LineStyle,
    PerformanceRequirement, Priority, Service, ServiceDomain, ServiceInteraction, Step,
};
use serde::Deserialize;

/// Raw catalog structure as the editor serializes it
#[derive(Debug, Deserialize)]
pub struct UiCatalog {
    #[serde(default)]
    pub domains: Vec<UiDomain>,
    #[serde(default)]
    pub actors: Vec<UiActor>,
    #[serde(default, alias = "integrationTypes")]
    pub integration_types: Vec<UiIntegrationType>,
}

#[derive(Debug, Deserialize)]
pub struct UiDomain {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub services: Vec<UiService>,
}

#[derive(Debug, Deserialize)]
pub struct UiService {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "shortCode")]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "dataStore", alias = "datastoreDescription")]
    pub datastore: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UiActor {
    pub id: String,
    #[serde(alias = "shortCode")]
    pub code: String,
    #[serde(alias = "fullName")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "actorType")]
    pub kind: ActorKind,
}

#[derive(Debug, Deserialize)]
pub struct UiIntegrationType {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "shortCode")]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "linePattern")]
    pub pattern: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, alias = "arrowShape")]
    pub arrow: Option<String>,
}

/// Raw workflow structure as the editor serializes it
#[derive(Debug, Deserialize)]
pub struct UiFlow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: FlowStatus,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default, alias = "primaryDomainId")]
    pub primary_domain_id: Option<String>,
    #[serde(default, alias = "involvedServiceIds")]
    pub involved_service_ids: Vec<String>,
    #[serde(default, alias = "actorIds")]
    pub actor_ids: Vec<String>,
    #[serde(default, alias = "entryPoint")]
    pub entry_point: Option<String>,
    #[serde(default)]
    pub trigger: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub steps: Vec<UiStep>,
    #[serde(default, alias = "serviceInteractions")]
    pub interactions: Vec<UiInteraction>,
    #[serde(default)]
    pub integrations: Vec<UiIntegration>,
    #[serde(default, alias = "businessRules")]
    pub business_rules: Vec<String>,
    #[serde(default, alias = "errorScenarios")]
    pub error_scenarios: Vec<UiErrorScenario>,
    #[serde(default, alias = "performanceRequirements")]
    pub performance_requirements: Vec<UiPerformanceRequirement>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// The editor keeps decisions as a flag plus loose fields; the conversion
/// folds them into the canonical `Decision` record.
#[derive(Debug, Deserialize)]
pub struct UiStep {
    #[serde(alias = "stepNumber")]
    pub sequence: u32,
    #[serde(alias = "actorId")]
    pub actor_id: String,
    pub action: String,
    #[serde(default, alias = "serviceIds")]
    pub service_ids: Vec<String>,
    #[serde(default, alias = "communicationTypeId")]
    pub communication_type_id: Option<String>,
    #[serde(default, alias = "inputData")]
    pub input: Option<UiDataSpec>,
    #[serde(default, alias = "outputData")]
    pub output: Option<UiDataSpec>,
    #[serde(default, alias = "isDecisionPoint")]
    pub is_decision_point: bool,
    #[serde(default, alias = "decisionCriteria")]
    pub decision_criteria: Option<String>,
    #[serde(default, alias = "conditionalPaths")]
    pub conditional_paths: Vec<UiConditionalPath>,
    #[serde(default)]
    pub notifications: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub sla: Option<String>,
    #[serde(default, alias = "errorHandling")]
    pub error_handling: Option<String>,
}

/// Step data descriptions arrive either as a bare string or as an object
/// with a schema attached.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UiDataSpec {
    Text(String),
    Structured {
        description: String,
        #[serde(default)]
        schema: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
pub struct UiConditionalPath {
    pub condition: String,
    #[serde(default)]
    pub outcome: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UiInteraction {
    #[serde(alias = "fromServiceId")]
    pub from_service_id: String,
    #[serde(alias = "toServiceId")]
    pub to_service_id: String,
    #[serde(alias = "interactionType")]
    pub kind: InteractionKind,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default, alias = "dataFormat")]
    pub data_format: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub latency: Option<String>,
    #[serde(default, alias = "authentication")]
    pub auth: Option<String>,
    #[serde(default, alias = "errorHandling")]
    pub error_handling: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UiIntegration {
    #[serde(alias = "fromServiceId")]
    pub from_service_id: String,
    #[serde(alias = "toServiceId")]
    pub to_service_id: String,
    #[serde(default, alias = "integrationTypeId")]
    pub integration_type_id: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UiErrorScenario {
    pub scenario: String,
    #[serde(default)]
    pub handling: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UiPerformanceRequirement {
    pub metric: String,
    pub target: String,
}

impl From<UiDataSpec> for DataSpec {
    fn from(raw: UiDataSpec) -> Self {
        match raw {
            UiDataSpec::Text(description) => DataSpec {
                description,
                schema: None,
            },
            UiDataSpec::Structured {
                description,
                schema,
            } => DataSpec {
                description,
                schema,
            },
        }
    }
}

impl IntoFlow for UiFlow {
    fn into_flow(self) -> Result<Flow, ModelConversionError> {
        if self.id.is_empty() {
            return Err(ModelConversionError::Validation(
                "flow id must not be empty".to_string(),
            ));
        }
        let steps = self
            .steps
            .into_iter()
            .map(|raw| {
                let decision = if raw.is_decision_point {
                    Some(Decision {
                        criteria: raw.decision_criteria.unwrap_or_default(),
                        paths: raw
                            .conditional_paths
                            .into_iter()
                            .map(|path| ConditionalPath {
                                condition: path.condition,
                                outcome: path.outcome,
                            })
                            .collect(),
                    })
                } else {
                    None
                };
                Step {
                    sequence: raw.sequence,
                    actor_id: raw.actor_id,
                    action: raw.action,
                    service_ids: raw.service_ids,
                    communication_type_id: raw.communication_type_id,
                    input: raw.input.map(DataSpec::from),
                    output: raw.output.map(DataSpec::from),
                    decision,
                    notifications: raw.notifications,
                    duration: raw.duration,
                    sla: raw.sla,
                    error_handling: raw.error_handling,
                }
            })
            .collect();

        let interactions = self
            .interactions
            .into_iter()
            .map(|raw| ServiceInteraction {
                from_service_id: raw.from_service_id,
                to_service_id: raw.to_service_id,
                kind: raw.kind,
                method: raw.method,
                endpoint: raw.endpoint,
                data_format: raw.data_format,
                data: raw.data,
                frequency: raw.frequency,
                latency: raw.latency,
                auth: raw.auth,
                error_handling: raw.error_handling,
            })
            .collect();

        let integrations = self
            .integrations
            .into_iter()
            .map(|raw| Integration {
                from_service_id: raw.from_service_id,
                to_service_id: raw.to_service_id,
                integration_type_id: raw.integration_type_id,
                data: raw.data,
                frequency: raw.frequency,
            })
            .collect();

        Ok(Flow {
            id: self.id,
            name: self.name,
            description: self.description,
            priority: self.priority,
            status: self.status,
            version: self.version,
            primary_domain_id: self.primary_domain_id,
            involved_service_ids: self.involved_service_ids,
            actor_ids: self.actor_ids,
            entry_point: self.entry_point,
            trigger: self.trigger,
            tags: self.tags,
            steps,
            interactions,
            integrations,
            business_rules: self.business_rules,
            error_scenarios: self
                .error_scenarios
                .into_iter()
                .map(|raw| ErrorScenario {
                    scenario: raw.scenario,
                    handling: raw.handling,
                })
                .collect(),
            performance_requirements: self
                .performance_requirements
                .into_iter()
                .map(|raw| PerformanceRequirement {
                    metric: raw.metric,
                    target: raw.target,
                })
                .collect(),
            notes: self.notes,
        })
    }
}

impl IntoCatalog for UiCatalog {
    fn into_catalog(self) -> Result<Catalog, ModelConversionError> {
        let domains = self
            .domains
            .into_iter()
            .map(|raw| ServiceDomain {
                id: raw.id,
                name: raw.name,
                color: raw.color,
                services: raw
                    .services
                    .into_iter()
                    .map(|service| Service {
                        id: service.id,
                        name: service.name,
                        code: service.code,
                        description: service.description,
                        datastore: service.datastore,
                    })
                    .collect(),
            })
            .collect();

        let actors = self
            .actors
            .into_iter()
            .map(|raw| Actor {
                id: raw.id,
                code: raw.code,
                name: raw.name,
                description: raw.description,
                kind: raw.kind,
            })
            .collect();

        let integration_types = self
            .integration_types
            .into_iter()
            .map(|raw| IntegrationType {
                id: raw.id,
                name: raw.name,
                code: raw.code,
                description: raw.description,
                style: LineStyle {
                    pattern: raw.pattern,
                    color: raw.color,
                    arrow: raw.arrow,
                },
            })
            .collect();

        Ok(Catalog {
            domains,
            actors,
            integration_types,
        })
    }
}
