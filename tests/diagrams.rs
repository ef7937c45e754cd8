//! Tests for the Mermaid sequence and topology graph generators.
mod common;
use common::*;
use flowscribe::prelude::*;

fn render(flow: &Flow, catalog: &Catalog, format: OutputFormat) -> String {
    Renderer::builder(flow, catalog)
        .build()
        .render(format)
        .unwrap()
}

fn declaration_lines<'a>(graph: &'a str, keyword: &str) -> Vec<&'a str> {
    graph
        .lines()
        .filter(|line| line.trim_start().starts_with(keyword))
        .collect()
}

#[test]
fn test_sequence_declares_participants_in_first_seen_order() {
    let catalog = enroll_catalog();
    let flow = enroll_flow();
    let graph = render(&flow, &catalog, OutputFormat::SequenceGraph);

    let actors = declaration_lines(&graph, "actor ");
    let participants = declaration_lines(&graph, "participant ");
    assert_eq!(actors.len(), 1);
    assert_eq!(participants.len(), 2);
    assert!(actors[0].contains("AB"));
    assert!(participants[0].contains("Intake Svc"));
    assert!(participants[1].contains("Review Svc"));

    // Declarations come before the first message line.
    let first_message = graph.find("->>").unwrap();
    assert!(graph.find("participant").unwrap() < first_message);
}

#[test]
fn test_sequence_messages_follow_step_order() {
    let catalog = enroll_catalog();
    let flow = enroll_flow();
    let graph = render(&flow, &catalog, OutputFormat::SequenceGraph);

    let submit = graph.find("AB->>Intake_Svc: Submit").unwrap();
    let review = graph.find("AB->>Intake_Svc: Review").unwrap();
    assert!(submit < review);
}

#[test]
fn test_sequence_decision_branch_is_balanced() {
    let catalog = enroll_catalog();
    let flow = enroll_flow();
    let graph = render(&flow, &catalog, OutputFormat::SequenceGraph);

    assert!(graph.contains("alt complete?: yes"));
    assert!(graph.contains("else no"));
    let alts = graph.matches("alt ").count();
    let ends = graph
        .lines()
        .filter(|line| line.trim() == "end")
        .count();
    assert_eq!(alts, 1);
    assert_eq!(ends, 1);
}

#[test]
fn test_sequence_reply_and_note_lines() {
    let catalog = billing_catalog();
    let flow = billing_flow();
    let graph = render(&flow, &catalog, OutputFormat::SequenceGraph);

    // Step 1 records an output, so the service replies to the actor.
    assert!(graph.contains("SCH->>INV: Issue invoice"));
    assert!(graph.contains("INV-->>SCH: Invoice record"));
    // Step 3 carries error-handling text, so the acting participant gets a note.
    assert!(graph.contains("Note over SCH: Retry three times, then park the invoice"));
}

#[test]
fn test_sequence_empty_flow_has_no_messages() {
    let catalog = enroll_catalog();
    let flow = empty_flow();
    let graph = render(&flow, &catalog, OutputFormat::SequenceGraph);

    assert!(graph.contains("sequenceDiagram"));
    assert!(!graph.contains("->>"));
    assert!(!graph.contains("participant"));
}

#[test]
fn test_topology_nodes_are_the_declared_set_only() {
    let catalog = billing_catalog();
    let mut flow = billing_flow();
    // A step referencing an extra service must not add a topology node.
    flow.steps[0]
        .service_ids
        .push("svc-unlisted".to_string());
    let graph = render(&flow, &catalog, OutputFormat::TopologyGraph);

    assert!(graph.contains("svc_invoice[\"Invoice Service\"]"));
    assert!(graph.contains("svc_payment[\"Payment Gateway\"]"));
    assert!(graph.contains("svc_mailer[\"Mailer\"]"));
    assert!(!graph.contains("svc_unlisted["));
}

#[test]
fn test_topology_edge_style_follows_interaction_kind() {
    let catalog = billing_catalog();
    let flow = billing_flow();
    let graph = render(&flow, &catalog, OutputFormat::TopologyGraph);

    assert!(graph.contains("svc_invoice -->|charge| svc_payment"));
    assert!(graph.contains("svc_payment -.->|Asynchronous| svc_mailer"));
    assert!(graph.contains("svc_mailer ==>|ReceiptSent| svc_invoice"));
}

#[test]
fn test_topology_without_interactions_has_nodes_but_no_edges() {
    let catalog = enroll_catalog();
    let flow = enroll_flow();
    let graph = render(&flow, &catalog, OutputFormat::TopologyGraph);

    assert!(graph.contains("graph LR"));
    assert!(graph.contains("s1[\"Intake Svc\"]"));
    assert!(graph.contains("s2[\"Review Svc\"]"));
    assert!(!graph.contains("-->"));
    assert!(!graph.contains("==>"));
}

#[test]
fn test_graphs_are_fenced_mermaid_blocks() {
    let catalog = enroll_catalog();
    let flow = enroll_flow();
    for format in [OutputFormat::SequenceGraph, OutputFormat::TopologyGraph] {
        let graph = render(&flow, &catalog, format);
        assert!(graph.starts_with("```mermaid\n"));
        assert!(graph.trim_end().ends_with("```"));
    }
}
