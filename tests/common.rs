//! Common test utilities for building flow and catalog fixtures.
use flowscribe::prelude::*;

/// Creates the catalog backing the enrollment scenario: one domain with two
/// services and a single human actor.
#[allow(dead_code)]
pub fn enroll_catalog() -> Catalog {
    Catalog {
        domains: vec![ServiceDomain {
            id: "d1".to_string(),
            name: "Admissions".to_string(),
            color: Some("#4C6EF5".to_string()),
            services: vec![
                Service {
                    id: "s1".to_string(),
                    name: "Intake Svc".to_string(),
                    code: None,
                    description: Some("Receives applications".to_string()),
                    datastore: None,
                },
                Service {
                    id: "s2".to_string(),
                    name: "Review Svc".to_string(),
                    code: None,
                    description: None,
                    datastore: Some("Postgres, one row per application".to_string()),
                },
            ],
        }],
        actors: vec![Actor {
            id: "a1".to_string(),
            code: "AB".to_string(),
            name: "Applicant".to_string(),
            description: None,
            kind: ActorKind::Human,
        }],
        integration_types: vec![IntegrationType {
            id: "t1".to_string(),
            name: "REST".to_string(),
            code: Some("rest".to_string()),
            description: None,
            style: LineStyle {
                pattern: Some("solid".to_string()),
                color: Some("#333333".to_string()),
                arrow: Some("filled".to_string()),
            },
        }],
    }
}

/// Creates a simple two-step flow: a plain step followed by a decision step
/// with two conditional paths.
#[allow(dead_code)]
pub fn enroll_flow() -> Flow {
    Flow {
        id: "f1".to_string(),
        name: "Enroll".to_string(),
        description: "Applicant enrollment".to_string(),
        priority: Priority::High,
        status: FlowStatus::Draft,
        involved_service_ids: vec!["s1".to_string(), "s2".to_string()],
        actor_ids: vec!["a1".to_string()],
        steps: vec![
            Step {
                sequence: 1,
                actor_id: "a1".to_string(),
                action: "Submit".to_string(),
                service_ids: vec!["s1".to_string()],
                communication_type_id: None,
                input: None,
                output: None,
                decision: None,
                notifications: vec![],
                duration: None,
                sla: None,
                error_handling: None,
            },
            Step {
                sequence: 2,
                actor_id: "a1".to_string(),
                action: "Review".to_string(),
                service_ids: vec!["s1".to_string(), "s2".to_string()],
                communication_type_id: None,
                input: None,
                output: None,
                decision: Some(Decision {
                    criteria: "complete?".to_string(),
                    paths: vec![
                        ConditionalPath {
                            condition: "yes".to_string(),
                            outcome: None,
                        },
                        ConditionalPath {
                            condition: "no".to_string(),
                            outcome: None,
                        },
                    ],
                }),
                notifications: vec![],
                duration: None,
                sla: None,
                error_handling: None,
            },
        ],
        ..Flow::default()
    }
}

/// Creates a catalog exercising every registry: two domains, coded services,
/// all three actor kinds and two integration types.
#[allow(dead_code)]
pub fn billing_catalog() -> Catalog {
    Catalog {
        domains: vec![
            ServiceDomain {
                id: "dom-billing".to_string(),
                name: "Billing".to_string(),
                color: Some("#12B886".to_string()),
                services: vec![
                    Service {
                        id: "svc-invoice".to_string(),
                        name: "Invoice Service".to_string(),
                        code: Some("INV".to_string()),
                        description: Some("Creates and tracks invoices".to_string()),
                        datastore: Some("Postgres invoices table".to_string()),
                    },
                    Service {
                        id: "svc-payment".to_string(),
                        name: "Payment Gateway".to_string(),
                        code: Some("PAY".to_string()),
                        description: None,
                        datastore: None,
                    },
                ],
            },
            ServiceDomain {
                id: "dom-notify".to_string(),
                name: "Notifications".to_string(),
                color: Some("#FAB005".to_string()),
                services: vec![Service {
                    id: "svc-mailer".to_string(),
                    name: "Mailer".to_string(),
                    code: Some("MAIL".to_string()),
                    description: None,
                    datastore: None,
                }],
            },
        ],
        actors: vec![
            Actor {
                id: "act-clerk".to_string(),
                code: "CL".to_string(),
                name: "Billing Clerk".to_string(),
                description: Some("Reviews disputed invoices".to_string()),
                kind: ActorKind::Human,
            },
            Actor {
                id: "act-scheduler".to_string(),
                code: "SCH".to_string(),
                name: "Nightly Scheduler".to_string(),
                description: None,
                kind: ActorKind::Automated,
            },
            Actor {
                id: "act-bank".to_string(),
                code: "BK".to_string(),
                name: "Bank".to_string(),
                description: None,
                kind: ActorKind::External,
            },
        ],
        integration_types: vec![
            IntegrationType {
                id: "it-rest".to_string(),
                name: "REST".to_string(),
                code: Some("rest".to_string()),
                description: None,
                style: LineStyle {
                    pattern: Some("solid".to_string()),
                    color: Some("#333333".to_string()),
                    arrow: Some("filled".to_string()),
                },
            },
            IntegrationType {
                id: "it-queue".to_string(),
                name: "Message Queue".to_string(),
                code: Some("mq".to_string()),
                description: Some("At-least-once delivery".to_string()),
                style: LineStyle {
                    pattern: Some("dashed".to_string()),
                    color: Some("#888888".to_string()),
                    arrow: Some("open".to_string()),
                },
            },
        ],
    }
}

/// Creates a flow touching every model feature: metadata, tags, decision
/// steps, notifications, detailed interactions of all three kinds, a legacy
/// integration, rules, error scenarios and performance requirements.
#[allow(dead_code)]
pub fn billing_flow() -> Flow {
    Flow {
        id: "flow-billing".to_string(),
        name: "Invoice Settlement".to_string(),
        description: "Settles an invoice from issue to payment".to_string(),
        priority: Priority::Critical,
        status: FlowStatus::Review,
        version: Some("1.2".to_string()),
        primary_domain_id: Some("dom-billing".to_string()),
        involved_service_ids: vec![
            "svc-invoice".to_string(),
            "svc-payment".to_string(),
            "svc-mailer".to_string(),
        ],
        actor_ids: vec!["act-clerk".to_string(), "act-scheduler".to_string()],
        entry_point: Some("POST /invoices".to_string()),
        trigger: Some("A new invoice is issued".to_string()),
        tags: vec!["billing".to_string(), "payments".to_string()],
        steps: vec![
            Step {
                sequence: 1,
                actor_id: "act-scheduler".to_string(),
                action: "Issue invoice".to_string(),
                service_ids: vec!["svc-invoice".to_string()],
                communication_type_id: Some("it-rest".to_string()),
                input: Some(DataSpec {
                    description: "Order summary".to_string(),
                    schema: Some("order-v2".to_string()),
                }),
                output: Some(DataSpec {
                    description: "Invoice record".to_string(),
                    schema: None,
                }),
                decision: None,
                notifications: vec!["Email copy to customer".to_string()],
                duration: Some("under a minute".to_string()),
                sla: None,
                error_handling: None,
            },
            Step {
                sequence: 2,
                actor_id: "act-clerk".to_string(),
                action: "Check amount".to_string(),
                service_ids: vec!["svc-invoice".to_string()],
                communication_type_id: None,
                input: None,
                output: None,
                decision: Some(Decision {
                    criteria: "amount over 10k?".to_string(),
                    paths: vec![
                        ConditionalPath {
                            condition: "yes".to_string(),
                            outcome: Some("manual approval".to_string()),
                        },
                        ConditionalPath {
                            condition: "no".to_string(),
                            outcome: Some("auto-charge".to_string()),
                        },
                    ],
                }),
                notifications: vec![],
                duration: None,
                sla: Some("review within 4h".to_string()),
                error_handling: None,
            },
            Step {
                sequence: 3,
                actor_id: "act-scheduler".to_string(),
                action: "Charge".to_string(),
                service_ids: vec!["svc-payment".to_string()],
                communication_type_id: Some("it-rest".to_string()),
                input: None,
                output: Some(DataSpec {
                    description: "Charge confirmation".to_string(),
                    schema: None,
                }),
                decision: None,
                notifications: vec![],
                duration: None,
                sla: None,
                error_handling: Some("Retry three times, then park the invoice".to_string()),
            },
        ],
        interactions: vec![
            ServiceInteraction {
                from_service_id: "svc-invoice".to_string(),
                to_service_id: "svc-payment".to_string(),
                kind: InteractionKind::Synchronous,
                method: Some("charge".to_string()),
                endpoint: Some("/v1/charges".to_string()),
                data_format: Some("JSON".to_string()),
                data: Some("invoice id, amount".to_string()),
                frequency: Some("per invoice".to_string()),
                latency: Some("p99 300ms".to_string()),
                auth: Some("mTLS".to_string()),
                error_handling: Some("circuit breaker".to_string()),
            },
            ServiceInteraction {
                from_service_id: "svc-payment".to_string(),
                to_service_id: "svc-mailer".to_string(),
                kind: InteractionKind::Asynchronous,
                method: None,
                endpoint: None,
                data_format: Some("JSON".to_string()),
                data: Some("receipt".to_string()),
                frequency: None,
                latency: None,
                auth: None,
                error_handling: None,
            },
            ServiceInteraction {
                from_service_id: "svc-mailer".to_string(),
                to_service_id: "svc-invoice".to_string(),
                kind: InteractionKind::EventDriven,
                method: Some("ReceiptSent".to_string()),
                endpoint: None,
                data_format: None,
                data: None,
                frequency: None,
                latency: None,
                auth: None,
                error_handling: None,
            },
        ],
        integrations: vec![Integration {
            from_service_id: "svc-invoice".to_string(),
            to_service_id: "svc-mailer".to_string(),
            integration_type_id: Some("it-queue".to_string()),
            data: Some("dunning reminders".to_string()),
            frequency: Some("daily".to_string()),
        }],
        business_rules: vec![
            "Invoices over 10k need manual approval".to_string(),
            "Receipts go out within one hour of charging".to_string(),
        ],
        error_scenarios: vec![ErrorScenario {
            scenario: "Payment gateway unreachable".to_string(),
            handling: Some("Park the invoice and alert the clerk".to_string()),
        }],
        performance_requirements: vec![PerformanceRequirement {
            metric: "Charge latency".to_string(),
            target: "p99 under 500ms".to_string(),
        }],
        notes: Some("Dispute handling is documented separately.".to_string()),
    }
}

/// A flow with no steps and no declared services.
#[allow(dead_code)]
pub fn empty_flow() -> Flow {
    Flow {
        id: "flow-empty".to_string(),
        name: "Empty".to_string(),
        ..Flow::default()
    }
}
