use crate::model::{DataSpec, Flow};
use crate::ordered::OrderedSet;
use crate::resolve::Resolver;
use itertools::Itertools;
use std::fmt::Write;

const BANNER: &str = "================================================================";
const RULE: &str = "----------------------------------------------------------------";

/// The fixed palette cycled across involved services, in declared order.
const SERVICE_PALETTE: [&str; 5] = ["#4C6EF5", "#12B886", "#FAB005", "#BE4BDB", "#FD7E14"];
const DECISION_FILL: &str = "#FFD43B";
const ERROR_BORDER: &str = "#E03131";

/// Formats the complete instruction text for a downstream diagram-authoring
/// agent. Section order is fixed; optional sections are skipped entirely when
/// their source collection is empty.
pub(super) fn generate(flow: &Flow, resolver: &Resolver, timestamp: &str) -> String {
    let mut out = String::new();

    writeln!(&mut out, "{}", BANNER).unwrap();
    writeln!(&mut out, "DIAGRAM AUTHORING INSTRUCTIONS").unwrap();
    writeln!(&mut out, "{}", BANNER).unwrap();
    writeln!(&mut out).unwrap();
    writeln!(&mut out, "FLOW: {}", flow.name).unwrap();
    if !flow.description.is_empty() {
        writeln!(&mut out, "{}", flow.description).unwrap();
    }

    write_basic_info(&mut out, flow, resolver);
    write_steps(&mut out, flow, resolver);
    write_interactions(&mut out, flow, resolver);
    write_integrations(&mut out, flow, resolver);
    write_business_rules(&mut out, flow);
    write_error_scenarios(&mut out, flow);
    write_performance(&mut out, flow);
    write_notes(&mut out, flow);
    write_requirements(&mut out, flow, resolver);

    writeln!(&mut out).unwrap();
    writeln!(&mut out, "{}", BANNER).unwrap();
    writeln!(&mut out, "Generated: {}", timestamp).unwrap();
    out
}

fn section(out: &mut String, title: &str) {
    writeln!(out).unwrap();
    writeln!(out, "{}", RULE).unwrap();
    writeln!(out, "{}", title).unwrap();
    writeln!(out, "{}", RULE).unwrap();
}

/// Writes `label: value` under the given indent when the value is present.
fn opt_line(out: &mut String, indent: &str, label: &str, value: &Option<String>) {
    if let Some(value) = value {
        writeln!(out, "{}{}: {}", indent, label, value).unwrap();
    }
}

fn format_data_spec(spec: &DataSpec) -> String {
    match &spec.schema {
        Some(schema) => format!("{} (schema: {})", spec.description, schema),
        None => spec.description.clone(),
    }
}

fn write_basic_info(out: &mut String, flow: &Flow, resolver: &Resolver) {
    section(out, "BASIC INFORMATION");
    let mut items: Vec<(&str, String)> = vec![
        ("Priority", flow.priority.to_string()),
        ("Status", flow.status.to_string()),
    ];
    if let Some(version) = &flow.version {
        items.push(("Version", version.clone()));
    }
    if let Some(domain_id) = &flow.primary_domain_id {
        items.push(("Primary Domain", resolver.domain_label(domain_id)));
    }
    if !flow.involved_service_ids.is_empty() {
        let services = flow
            .involved_service_ids
            .iter()
            .map(|id| resolver.service_label(id))
            .join(", ");
        items.push(("Involved Services", services));
    }
    if !flow.actor_ids.is_empty() {
        let actors = flow
            .actor_ids
            .iter()
            .map(|id| resolver.actor_label(id))
            .join(", ");
        items.push(("Participating Actors", actors));
    }
    if let Some(entry) = &flow.entry_point {
        items.push(("Entry Point", entry.clone()));
    }
    if let Some(trigger) = &flow.trigger {
        items.push(("Trigger", trigger.clone()));
    }
    if !flow.tags.is_empty() {
        items.push(("Tags", flow.tags.join(", ")));
    }
    for (index, (label, value)) in items.iter().enumerate() {
        writeln!(out, "{}. {}: {}", index + 1, label, value).unwrap();
    }
}

fn write_steps(out: &mut String, flow: &Flow, resolver: &Resolver) {
    section(out, "WORKFLOW STEPS");
    if flow.steps.is_empty() {
        writeln!(out, "No steps defined.").unwrap();
        return;
    }
    for step in &flow.steps {
        writeln!(out).unwrap();
        writeln!(out, "STEP {}: {}", step.sequence, step.action).unwrap();
        writeln!(out, "  Actor: {}", resolver.actor_label(&step.actor_id)).unwrap();
        if !step.service_ids.is_empty() {
            let services = step
                .service_ids
                .iter()
                .map(|id| resolver.service_label(id))
                .join(", ");
            writeln!(out, "  Services: {}", services).unwrap();
        }
        if let Some(type_id) = &step.communication_type_id {
            writeln!(
                out,
                "  Communication: {}",
                resolver.integration_type_label(type_id)
            )
            .unwrap();
        }
        if let Some(input) = &step.input {
            writeln!(out, "  Input: {}", format_data_spec(input)).unwrap();
        }
        if let Some(output) = &step.output {
            writeln!(out, "  Output: {}", format_data_spec(output)).unwrap();
        }
        if let Some(decision) = &step.decision {
            writeln!(out, "  Decision Point: {}", decision.criteria).unwrap();
            for (index, path) in decision.paths.iter().enumerate() {
                match &path.outcome {
                    Some(outcome) => {
                        writeln!(out, "    Path {}: {} -> {}", index + 1, path.condition, outcome)
                            .unwrap();
                    }
                    None => writeln!(out, "    Path {}: {}", index + 1, path.condition).unwrap(),
                }
            }
        }
        if !step.notifications.is_empty() {
            writeln!(out, "  Notifications: {}", step.notifications.join("; ")).unwrap();
        }
        opt_line(out, "  ", "Duration", &step.duration);
        opt_line(out, "  ", "SLA", &step.sla);
        opt_line(out, "  ", "Error Handling", &step.error_handling);
    }
}

fn write_interactions(out: &mut String, flow: &Flow, resolver: &Resolver) {
    if flow.interactions.is_empty() {
        return;
    }
    section(out, "SERVICE INTERACTIONS");
    for (index, interaction) in flow.interactions.iter().enumerate() {
        writeln!(out).unwrap();
        writeln!(
            out,
            "{}. {} -> {} [{}]",
            index + 1,
            resolver.service_label(&interaction.from_service_id),
            resolver.service_label(&interaction.to_service_id),
            interaction.kind
        )
        .unwrap();
        opt_line(out, "   ", "Method", &interaction.method);
        opt_line(out, "   ", "Endpoint", &interaction.endpoint);
        opt_line(out, "   ", "Data Format", &interaction.data_format);
        opt_line(out, "   ", "Data", &interaction.data);
        opt_line(out, "   ", "Frequency", &interaction.frequency);
        opt_line(out, "   ", "Latency", &interaction.latency);
        opt_line(out, "   ", "Auth", &interaction.auth);
        opt_line(out, "   ", "Error Handling", &interaction.error_handling);
    }
}

fn write_integrations(out: &mut String, flow: &Flow, resolver: &Resolver) {
    if flow.integrations.is_empty() {
        return;
    }
    section(out, "INTEGRATIONS");
    for (index, integration) in flow.integrations.iter().enumerate() {
        let type_label = integration
            .integration_type_id
            .as_deref()
            .map(|id| resolver.integration_type_label(id));
        match type_label {
            Some(label) => writeln!(
                out,
                "{}. {} -> {} via {}",
                index + 1,
                resolver.service_label(&integration.from_service_id),
                resolver.service_label(&integration.to_service_id),
                label
            )
            .unwrap(),
            None => writeln!(
                out,
                "{}. {} -> {}",
                index + 1,
                resolver.service_label(&integration.from_service_id),
                resolver.service_label(&integration.to_service_id)
            )
            .unwrap(),
        }
        opt_line(out, "   ", "Data", &integration.data);
        opt_line(out, "   ", "Frequency", &integration.frequency);
    }
}

fn write_business_rules(out: &mut String, flow: &Flow) {
    if flow.business_rules.is_empty() {
        return;
    }
    section(out, "BUSINESS RULES");
    for (index, rule) in flow.business_rules.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, rule).unwrap();
    }
}

fn write_error_scenarios(out: &mut String, flow: &Flow) {
    if flow.error_scenarios.is_empty() {
        return;
    }
    section(out, "ERROR SCENARIOS");
    for (index, scenario) in flow.error_scenarios.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, scenario.scenario).unwrap();
        opt_line(out, "   ", "Handling", &scenario.handling);
    }
}

fn write_performance(out: &mut String, flow: &Flow) {
    if flow.performance_requirements.is_empty() {
        return;
    }
    section(out, "PERFORMANCE REQUIREMENTS");
    for (index, requirement) in flow.performance_requirements.iter().enumerate() {
        writeln!(out, "{}. {}: {}", index + 1, requirement.metric, requirement.target).unwrap();
    }
}

fn write_notes(out: &mut String, flow: &Flow) {
    if let Some(notes) = &flow.notes {
        section(out, "NOTES");
        writeln!(out, "{}", notes).unwrap();
    }
}

/// The fixed nine-instruction block. Always emitted, since it carries the
/// drawing conventions even for a degenerate flow.
fn write_requirements(out: &mut String, flow: &Flow, resolver: &Resolver) {
    section(out, "DIAGRAM REQUIREMENTS");

    let mut swimlanes = OrderedSet::new();
    for step in &flow.steps {
        swimlanes.insert(resolver.actor_label(&step.actor_id));
    }
    if swimlanes.is_empty() {
        writeln!(
            out,
            "1. Create one swimlane per distinct actor that appears in any step."
        )
        .unwrap();
    } else {
        writeln!(
            out,
            "1. Create one swimlane per distinct actor that appears in any step. Swimlanes, in order of first appearance: {}.",
            swimlanes.iter().join(", ")
        )
        .unwrap();
    }

    let step_count = flow.steps.len();
    let plural = if step_count == 1 { "" } else { "s" };
    writeln!(
        out,
        "2. Draw exactly one shape per step: this flow has {} step{}, so the diagram must contain exactly {} step shapes. Never merge or summarize steps. Every shape must show the step number, the action text and the services involved.",
        step_count, plural, step_count
    )
    .unwrap();

    writeln!(
        out,
        "3. Add a callout for every documented service interaction. Arrow style follows the interaction kind: solid = synchronous, dashed = asynchronous, jagged = event-driven."
    )
    .unwrap();

    writeln!(
        out,
        "4. Label every connecting arrow with the data it carries and its format."
    )
    .unwrap();

    writeln!(
        out,
        "5. Render every decision step as a diamond and give each of its conditional paths a labeled outgoing edge."
    )
    .unwrap();

    writeln!(
        out,
        "6. Badge conventions: gear badge on automated steps, bell badge on steps that send notifications, plug badge on external integrations, cylinder badge on datastore access, antenna badge on remote calls."
    )
    .unwrap();

    let assignments = if flow.involved_service_ids.is_empty() {
        String::new()
    } else {
        let pairs = flow
            .involved_service_ids
            .iter()
            .enumerate()
            .map(|(index, id)| {
                format!(
                    "{} = {}",
                    resolver.service_label(id),
                    SERVICE_PALETTE[index % SERVICE_PALETTE.len()]
                )
            })
            .join(", ");
        format!(" For this flow: {}.", pairs)
    };
    writeln!(
        out,
        "7. Assign one palette color per involved service, cycling {} in declared order.{} Domain-owned elements use their domain color. Decision diamonds are filled {}. Steps with error handling get a {} border.",
        SERVICE_PALETTE.join(", "),
        assignments,
        DECISION_FILL,
        ERROR_BORDER
    )
    .unwrap();

    writeln!(
        out,
        "8. Lay the diagram out left to right with at least 120px between consecutive shapes and 80px between swimlanes; every shape is aligned to its actor's swimlane."
    )
    .unwrap();

    writeln!(
        out,
        "9. Finish with a legend that lists every color, line style, icon and shape convention actually used in the diagram."
    )
    .unwrap();
}
