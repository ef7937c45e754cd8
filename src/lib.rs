//! # flowscribe - Workflow Rendering Engine
//!
//! **flowscribe** turns an in-memory microservice workflow model into the
//! artifacts analysts actually hand around: a diagram-authoring instruction
//! text, Mermaid sequence and topology graphs, a service interaction matrix,
//! a structured Markdown document and a raw JSON export.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic on the way in. It operates on a canonical
//! model of a workflow ([`Flow`](model::Flow)) plus a project catalog
//! ([`Catalog`](model::Catalog)). The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your editor or storage format into your own
//!     Rust structs (or use the bundled [`ui`] raw-JSON layer).
//! 2.  **Convert to the Canonical Model**: Implement the
//!     [`IntoFlow`](model::IntoFlow) / [`IntoCatalog`](model::IntoCatalog)
//!     traits to translate your structs into `Flow` and `Catalog`.
//! 3.  **Render**: Build a [`Renderer`](render::Renderer) and request any
//!     [`OutputFormat`](render::OutputFormat). Every render is an independent
//!     pure computation over the same two read-only inputs.
//!
//! Unresolved catalog references never fail a render: they degrade to fixed
//! sentinel labels ("Unknown Service", "Unknown Actor", ...) so a
//! half-edited model still produces inspectable output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowscribe::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let flow_json = std::fs::read_to_string("path/to/flow.json")?;
//!     let catalog_json = std::fs::read_to_string("path/to/catalog.json")?;
//!
//!     let flow = serde_json::from_str::<UiFlow>(&flow_json)?.into_flow()?;
//!     let catalog = serde_json::from_str::<UiCatalog>(&catalog_json)?.into_catalog()?;
//!
//!     let renderer = Renderer::builder(&flow, &catalog).build();
//!     let prompt = renderer.render(OutputFormat::Prompt)?;
//!     println!("{}", prompt);
//!
//!     let filename = renderer.suggested_filename(OutputFormat::SequenceGraph);
//!     std::fs::write(filename, renderer.render(OutputFormat::SequenceGraph)?)?;
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod error;
pub mod model;
pub mod ordered;
pub mod prelude;
pub mod render;
pub mod resolve;
pub mod ui;
