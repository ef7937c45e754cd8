//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the flowscribe
//! crate. Import this module to get access to the core functionality without
//! having to import each type individually.

// Rendering engine
pub use crate::render::{OutputFormat, Renderer, RendererBuilder};

// Canonical model
pub use crate::model::{
    Actor, ActorKind, Catalog, ConditionalPath, DataSpec, Decision, ErrorScenario, Flow,
    FlowStatus, Integration, IntegrationType, InteractionKind, IntoCatalog, IntoFlow, LineStyle,
    PerformanceRequirement, Priority, Service, ServiceDomain, ServiceInteraction, Step,
};

// Catalog lookup
pub use crate::resolve::{Resolved, Resolver};

// Time injection
pub use crate::clock::{Clock, FixedClock, SystemClock};

// Raw editor-JSON layer
pub use crate::ui::{UiCatalog, UiFlow};

// Error types
pub use crate::error::{ModelConversionError, RenderError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
