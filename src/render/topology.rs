use super::ident;
use crate::model::{Flow, InteractionKind};
use crate::resolve::Resolver;
use std::fmt::Write;

/// Formats the Mermaid `graph LR` markup of services and their interactions.
///
/// Nodes are exactly the flow's declared involved-service set; edges are the
/// detailed interaction records. A flow with no interactions still gets its
/// nodes.
pub(super) fn generate(flow: &Flow, resolver: &Resolver) -> String {
    let mut out = String::new();
    writeln!(&mut out, "```mermaid").unwrap();
    writeln!(&mut out, "graph LR").unwrap();

    for service_id in &flow.involved_service_ids {
        writeln!(
            &mut out,
            "    {}[\"{}\"]",
            ident(service_id),
            resolver.service_label(service_id)
        )
        .unwrap();
    }

    for interaction in &flow.interactions {
        let arrow = match interaction.kind {
            InteractionKind::Synchronous => "-->",
            InteractionKind::Asynchronous => "-.->",
            InteractionKind::EventDriven => "==>",
        };
        let label = interaction
            .method
            .clone()
            .unwrap_or_else(|| interaction.kind.to_string());
        writeln!(
            &mut out,
            "    {} {}|{}| {}",
            ident(&interaction.from_service_id),
            arrow,
            label,
            ident(&interaction.to_service_id)
        )
        .unwrap();
    }

    writeln!(&mut out, "```").unwrap();
    out
}
