use crate::model::{DataSpec, Flow};
use crate::resolve::Resolver;
use itertools::Itertools;
use std::fmt::Write;

/// Formats the archival Markdown document. Same walk as the prompt generator,
/// but without the diagram-requirements block; the audience here is a reader,
/// not an authoring agent.
pub(super) fn generate(flow: &Flow, resolver: &Resolver, timestamp: &str) -> String {
    let mut out = String::new();

    writeln!(&mut out, "# {}", flow.name).unwrap();
    if !flow.description.is_empty() {
        writeln!(&mut out).unwrap();
        writeln!(&mut out, "{}", flow.description).unwrap();
    }

    write_metadata(&mut out, flow);
    write_actors(&mut out, flow, resolver);
    write_steps(&mut out, flow, resolver);
    write_integrations(&mut out, flow, resolver);
    write_business_rules(&mut out, flow);
    if let Some(notes) = &flow.notes {
        writeln!(&mut out).unwrap();
        writeln!(&mut out, "## Notes").unwrap();
        writeln!(&mut out).unwrap();
        writeln!(&mut out, "{}", notes).unwrap();
    }

    writeln!(&mut out).unwrap();
    writeln!(&mut out, "---").unwrap();
    writeln!(&mut out, "*Generated: {}*", timestamp).unwrap();
    out
}

fn write_metadata(out: &mut String, flow: &Flow) {
    writeln!(out).unwrap();
    writeln!(out, "| Field | Value |").unwrap();
    writeln!(out, "|---|---|").unwrap();
    writeln!(out, "| Priority | {} |", flow.priority).unwrap();
    writeln!(out, "| Status | {} |", flow.status).unwrap();
    if let Some(version) = &flow.version {
        writeln!(out, "| Version | {} |", version).unwrap();
    }
    if let Some(entry) = &flow.entry_point {
        writeln!(out, "| Entry Point | {} |", entry).unwrap();
    }
    if let Some(trigger) = &flow.trigger {
        writeln!(out, "| Trigger | {} |", trigger).unwrap();
    }
}

fn write_actors(out: &mut String, flow: &Flow, resolver: &Resolver) {
    if flow.actor_ids.is_empty() {
        return;
    }
    writeln!(out).unwrap();
    writeln!(out, "## Actors").unwrap();
    writeln!(out).unwrap();
    for id in &flow.actor_ids {
        match resolver.actor(id).found() {
            Some(actor) => {
                writeln!(out, "- {} - {} ({})", actor.code, actor.name, actor.kind).unwrap();
            }
            None => writeln!(out, "- {}", resolver.actor_label(id)).unwrap(),
        }
    }
}

fn write_steps(out: &mut String, flow: &Flow, resolver: &Resolver) {
    writeln!(out).unwrap();
    writeln!(out, "## Steps").unwrap();
    if flow.steps.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "No steps defined.").unwrap();
        return;
    }
    for step in &flow.steps {
        writeln!(out).unwrap();
        writeln!(out, "### Step {}: {}", step.sequence, step.action).unwrap();
        writeln!(out).unwrap();
        writeln!(out, "- **Actor:** {}", resolver.actor_label(&step.actor_id)).unwrap();
        if !step.service_ids.is_empty() {
            let services = step
                .service_ids
                .iter()
                .map(|id| resolver.service_label(id))
                .join(", ");
            writeln!(out, "- **Services:** {}", services).unwrap();
        }
        if let Some(type_id) = &step.communication_type_id {
            writeln!(
                out,
                "- **Communication:** {}",
                resolver.integration_type_label(type_id)
            )
            .unwrap();
        }
        if let Some(input) = &step.input {
            writeln!(out, "- **Input:** {}", format_data_spec(input)).unwrap();
        }
        if let Some(output) = &step.output {
            writeln!(out, "- **Output:** {}", format_data_spec(output)).unwrap();
        }
        if let Some(decision) = &step.decision {
            let paths = decision
                .paths
                .iter()
                .map(|path| match &path.outcome {
                    Some(outcome) => format!("{} -> {}", path.condition, outcome),
                    None => path.condition.clone(),
                })
                .join("; ");
            writeln!(out).unwrap();
            if paths.is_empty() {
                writeln!(out, "> **Decision:** {}", decision.criteria).unwrap();
            } else {
                writeln!(out, "> **Decision:** {} ({})", decision.criteria, paths).unwrap();
            }
        }
    }
}

fn write_integrations(out: &mut String, flow: &Flow, resolver: &Resolver) {
    if flow.interactions.is_empty() && flow.integrations.is_empty() {
        return;
    }
    writeln!(out).unwrap();
    writeln!(out, "## Integrations").unwrap();
    writeln!(out).unwrap();
    for interaction in &flow.interactions {
        let label = interaction
            .method
            .clone()
            .unwrap_or_else(|| interaction.kind.to_string());
        writeln!(
            out,
            "- {} -> {} ({}): {}",
            resolver.service_label(&interaction.from_service_id),
            resolver.service_label(&interaction.to_service_id),
            interaction.kind,
            label
        )
        .unwrap();
    }
    for integration in &flow.integrations {
        let type_label = integration
            .integration_type_id
            .as_deref()
            .map(|id| resolver.integration_type_label(id));
        match type_label {
            Some(label) => writeln!(
                out,
                "- {} -> {} via {}",
                resolver.service_label(&integration.from_service_id),
                resolver.service_label(&integration.to_service_id),
                label
            )
            .unwrap(),
            None => writeln!(
                out,
                "- {} -> {}",
                resolver.service_label(&integration.from_service_id),
                resolver.service_label(&integration.to_service_id)
            )
            .unwrap(),
        }
    }
}

fn write_business_rules(out: &mut String, flow: &Flow) {
    if flow.business_rules.is_empty() {
        return;
    }
    writeln!(out).unwrap();
    writeln!(out, "## Business Rules").unwrap();
    writeln!(out).unwrap();
    for (index, rule) in flow.business_rules.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, rule).unwrap();
    }
}

fn format_data_spec(spec: &DataSpec) -> String {
    match &spec.schema {
        Some(schema) => format!("{} (`{}`)", spec.description, schema),
        None => spec.description.clone(),
    }
}
