use crate::clock::{Clock, SystemClock};
use crate::error::RenderError;
use crate::model::{Catalog, Flow};
use crate::resolve::Resolver;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

mod document;
mod matrix;
mod prompt;
mod sequence;
mod topology;

static DEFAULT_CLOCK: SystemClock = SystemClock;

/// The output representations the engine can produce from one flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Instruction text for a downstream diagram-authoring agent.
    Prompt,
    /// Archival Markdown document.
    Document,
    /// Mermaid `sequenceDiagram` markup.
    SequenceGraph,
    /// Mermaid `graph LR` markup of services and their interactions.
    TopologyGraph,
    /// N×N adjacency table plus a detailed interaction listing.
    InteractionMatrix,
    /// The flow model serialized verbatim.
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Prompt,
        OutputFormat::Document,
        OutputFormat::SequenceGraph,
        OutputFormat::TopologyGraph,
        OutputFormat::InteractionMatrix,
        OutputFormat::Json,
    ];

    /// File extension for sink output.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Prompt => "txt",
            OutputFormat::Document => "md",
            OutputFormat::SequenceGraph | OutputFormat::TopologyGraph => "mmd",
            OutputFormat::InteractionMatrix => "md",
            OutputFormat::Json => "json",
        }
    }

    /// Filename suffix distinguishing the formats that share an extension.
    fn suffix(&self) -> &'static str {
        match self {
            OutputFormat::Prompt => "diagram-prompt",
            OutputFormat::Document => "document",
            OutputFormat::SequenceGraph => "sequence",
            OutputFormat::TopologyGraph => "topology",
            OutputFormat::InteractionMatrix => "interactions",
            OutputFormat::Json => "flow",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Prompt => "prompt",
            OutputFormat::Document => "document",
            OutputFormat::SequenceGraph => "sequence",
            OutputFormat::TopologyGraph => "topology",
            OutputFormat::InteractionMatrix => "matrix",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prompt" => Ok(OutputFormat::Prompt),
            "document" => Ok(OutputFormat::Document),
            "sequence" => Ok(OutputFormat::SequenceGraph),
            "topology" => Ok(OutputFormat::TopologyGraph),
            "matrix" => Ok(OutputFormat::InteractionMatrix),
            "json" => Ok(OutputFormat::Json),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

/// The rendering engine: a read-only view over one flow and one catalog.
///
/// Every render is an independent pure computation; the renderer holds no
/// mutable state and may be shared freely. Construct it through
/// [`Renderer::builder`].
pub struct Renderer<'a> {
    flow: &'a Flow,
    catalog: &'a Catalog,
    clock: &'a dyn Clock,
}

pub struct RendererBuilder<'a> {
    flow: &'a Flow,
    catalog: &'a Catalog,
    clock: &'a dyn Clock,
}

impl<'a> RendererBuilder<'a> {
    pub fn new(flow: &'a Flow, catalog: &'a Catalog) -> Self {
        Self {
            flow,
            catalog,
            clock: &DEFAULT_CLOCK,
        }
    }

    /// Overrides the system clock, making timestamped outputs reproducible.
    pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn build(self) -> Renderer<'a> {
        Renderer {
            flow: self.flow,
            catalog: self.catalog,
            clock: self.clock,
        }
    }
}

impl<'a> Renderer<'a> {
    pub fn builder(flow: &'a Flow, catalog: &'a Catalog) -> RendererBuilder<'a> {
        RendererBuilder::new(flow, catalog)
    }

    /// Renders the flow in the requested format.
    ///
    /// Only the JSON passthrough can fail (serialization); every other
    /// format degrades to sentinel labels and omitted sections instead of
    /// erroring.
    pub fn render(&self, format: OutputFormat) -> Result<String, RenderError> {
        debug!(format = %format, flow = %self.flow.id, steps = self.flow.steps.len(), "rendering flow");
        let resolver = Resolver::new(self.catalog);
        let output = match format {
            OutputFormat::Prompt => prompt::generate(self.flow, &resolver, &self.timestamp()),
            OutputFormat::Document => document::generate(self.flow, &resolver, &self.timestamp()),
            OutputFormat::SequenceGraph => sequence::generate(self.flow, &resolver),
            OutputFormat::TopologyGraph => topology::generate(self.flow, &resolver),
            OutputFormat::InteractionMatrix => matrix::generate(self.flow, &resolver),
            OutputFormat::Json => serde_json::to_string_pretty(self.flow)?,
        };
        Ok(output)
    }

    /// A filename for sink output, derived from the flow name.
    pub fn suggested_filename(&self, format: OutputFormat) -> String {
        let stem = if self.flow.name.is_empty() {
            "flow".to_string()
        } else {
            file_slug(&self.flow.name)
        };
        format!("{}-{}.{}", stem, format.suffix(), format.extension())
    }

    fn timestamp(&self) -> String {
        self.clock.now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

/// Lowercase, dash-separated form of a display name, for filenames.
fn file_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() { "flow".to_string() } else { slug }
}

/// A Mermaid-safe identifier derived from a display label. Labels are still
/// shown in full via `as`/bracket syntax; only the identifier is sanitized.
pub(crate) fn ident(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_alphanumeric() {
            out.push(c);
        } else if c == ' ' || c == '-' || c == '.' || c == '/' {
            out.push('_');
        }
    }
    if out.is_empty() || out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, 'n');
    }
    out
}
