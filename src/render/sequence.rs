use super::ident;
use crate::model::{Flow, Step};
use crate::ordered::OrderedSet;
use crate::resolve::Resolver;
use std::fmt::Write;

/// Formats the Mermaid `sequenceDiagram` markup.
///
/// Participants are collected by walking the steps once: the acting actor (by
/// short code), then every service the step references (by short code or
/// name), deduplicated in first-seen order. The participant set here is
/// derived from step contents; it is intentionally not the flow's declared
/// involved-service set.
pub(super) fn generate(flow: &Flow, resolver: &Resolver) -> String {
    let mut out = String::new();
    writeln!(&mut out, "```mermaid").unwrap();
    writeln!(&mut out, "sequenceDiagram").unwrap();

    let mut seen = OrderedSet::new();
    for step in &flow.steps {
        if seen.insert(format!("actor:{}", step.actor_id)) {
            declare(&mut out, "actor", &resolver.actor_short(&step.actor_id));
        }
        for service_id in &step.service_ids {
            if seen.insert(format!("service:{}", service_id)) {
                declare(&mut out, "participant", &resolver.service_short(service_id));
            }
        }
    }

    for step in &flow.steps {
        let actor = ident(&resolver.actor_short(&step.actor_id));
        match &step.decision {
            Some(decision) => {
                let mut paths = decision.paths.iter();
                match paths.next() {
                    Some(first) => {
                        writeln!(&mut out, "    alt {}: {}", decision.criteria, first.condition)
                            .unwrap();
                    }
                    None => writeln!(&mut out, "    alt {}", decision.criteria).unwrap(),
                }
                write_messages(&mut out, step, resolver, &actor, "        ");
                for path in paths {
                    writeln!(&mut out, "    else {}", path.condition).unwrap();
                }
                writeln!(&mut out, "    end").unwrap();
            }
            None => write_messages(&mut out, step, resolver, &actor, "    "),
        }
        if let Some(error) = &step.error_handling {
            writeln!(&mut out, "    Note over {}: {}", actor, error).unwrap();
        }
    }

    writeln!(&mut out, "```").unwrap();
    out
}

/// Declares a participant, aliasing the display label when it is not already
/// a valid Mermaid identifier.
fn declare(out: &mut String, keyword: &str, label: &str) {
    let id = ident(label);
    if id == label {
        writeln!(out, "    {} {}", keyword, id).unwrap();
    } else {
        writeln!(out, "    {} {} as {}", keyword, id, label).unwrap();
    }
}

/// One request line per referenced service, plus a reply line when the step
/// records an output.
fn write_messages(out: &mut String, step: &Step, resolver: &Resolver, actor: &str, indent: &str) {
    for service_id in &step.service_ids {
        let service = ident(&resolver.service_short(service_id));
        writeln!(out, "{}{}->>{}: {}", indent, actor, service, step.action).unwrap();
        if let Some(output) = &step.output {
            writeln!(out, "{}{}-->>{}: {}", indent, service, actor, output.description).unwrap();
        }
    }
}
