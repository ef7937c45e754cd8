use super::{Catalog, Flow};
use crate::error::ModelConversionError;

/// A trait for custom data models that can be converted into a canonical [`Flow`].
///
/// This is the primary extension point for making flowscribe format-agnostic.
/// Implement it on the structs you parse your editor or storage format into,
/// and the rendering engine can consume them without knowing where they came
/// from. The bundled [`UiFlow`](crate::ui::UiFlow) raw-JSON layer is one such
/// implementation.
///
/// # Example
///
/// ```rust,no_run
/// use flowscribe::prelude::*;
/// use flowscribe::error::ModelConversionError;
///
/// struct MyStep { number: u32, actor: String, text: String }
/// struct MyWorkflow { id: String, title: String, steps: Vec<MyStep> }
///
/// impl IntoFlow for MyWorkflow {
///     fn into_flow(self) -> std::result::Result<Flow, ModelConversionError> {
///         Ok(Flow {
///             id: self.id,
///             name: self.title,
///             steps: self
///                 .steps
///                 .into_iter()
///                 .map(|s| Step {
///                     sequence: s.number,
///                     actor_id: s.actor,
///                     action: s.text,
///                     service_ids: vec![],
///                     communication_type_id: None,
///                     input: None,
///                     output: None,
///                     decision: None,
///                     notifications: vec![],
///                     duration: None,
///                     sla: None,
///                     error_handling: None,
///                 })
///                 .collect(),
///             ..Flow::default()
///         })
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a canonical workflow model.
    fn into_flow(self) -> Result<Flow, ModelConversionError>;
}

/// A trait for custom registry formats that can be converted into a [`Catalog`].
pub trait IntoCatalog {
    /// Consumes the object and converts it into a canonical catalog.
    fn into_catalog(self) -> Result<Catalog, ModelConversionError>;
}
