use crate::model::Flow;
use crate::resolve::Resolver;
use itertools::Itertools;
use std::fmt::Write;

/// Formats the N×N adjacency table plus the detailed interaction listing.
///
/// Rows and columns are the flow's declared involved-service set in stored
/// order: row = calling service, column = called service. The matrix is not
/// forced symmetric.
pub(super) fn generate(flow: &Flow, resolver: &Resolver) -> String {
    if flow.involved_service_ids.is_empty() {
        return "No services declared for this flow.\n".to_string();
    }

    let mut out = String::new();
    let labels: Vec<String> = flow
        .involved_service_ids
        .iter()
        .map(|id| resolver.service_label(id))
        .collect();

    writeln!(&mut out, "## Service Interaction Matrix").unwrap();
    writeln!(&mut out).unwrap();
    writeln!(&mut out, "| From \\ To | {} |", labels.join(" | ")).unwrap();
    writeln!(&mut out, "|{}", "---|".repeat(labels.len() + 1)).unwrap();

    for (row_id, row_label) in flow.involved_service_ids.iter().zip(&labels) {
        let cells = flow
            .involved_service_ids
            .iter()
            .map(|col_id| {
                if col_id == row_id {
                    return "-".to_string();
                }
                flow.interactions
                    .iter()
                    .filter(|x| &x.from_service_id == row_id && &x.to_service_id == col_id)
                    .map(|x| x.method.clone().unwrap_or_else(|| x.kind.to_string()))
                    .join(", ")
            })
            .join(" | ");
        writeln!(&mut out, "| **{}** | {} |", row_label, cells).unwrap();
    }

    if !flow.interactions.is_empty() {
        writeln!(&mut out).unwrap();
        writeln!(&mut out, "## Interaction Details").unwrap();
        for interaction in &flow.interactions {
            writeln!(&mut out).unwrap();
            writeln!(
                &mut out,
                "### {} -> {}",
                resolver.service_label(&interaction.from_service_id),
                resolver.service_label(&interaction.to_service_id)
            )
            .unwrap();
            writeln!(&mut out).unwrap();
            writeln!(&mut out, "- **Type:** {}", interaction.kind).unwrap();
            detail(&mut out, "Method", &interaction.method);
            detail(&mut out, "Endpoint", &interaction.endpoint);
            detail(&mut out, "Data Format", &interaction.data_format);
            detail(&mut out, "Data", &interaction.data);
            detail(&mut out, "Frequency", &interaction.frequency);
            detail(&mut out, "Latency", &interaction.latency);
            detail(&mut out, "Auth", &interaction.auth);
            detail(&mut out, "Error Handling", &interaction.error_handling);
        }
    }

    out
}

fn detail(out: &mut String, label: &str, value: &Option<String>) {
    if let Some(value) = value {
        writeln!(out, "- **{}:** {}", label, value).unwrap();
    }
}
