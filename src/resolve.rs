use crate::model::{Actor, Catalog, IntegrationType, Service, ServiceDomain};

/// Sentinel label for a service id with no catalog entry.
pub const UNKNOWN_SERVICE: &str = "Unknown Service";
/// Sentinel label for an actor id with no catalog entry.
pub const UNKNOWN_ACTOR: &str = "Unknown Actor";
/// Sentinel label for an integration-type id with no catalog entry.
pub const UNKNOWN_TYPE: &str = "Unknown Type";
/// Sentinel label for a domain id with no catalog entry.
pub const UNKNOWN_DOMAIN: &str = "Unknown Domain";

/// The outcome of a catalog lookup.
///
/// A miss carries the id that failed to resolve, so tests and callers can see
/// exactly which reference was dangling. Rendering code maps `Missing` to a
/// fixed sentinel label; it never surfaces the raw id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    Found(T),
    Missing(String),
}

impl<T> Resolved<T> {
    /// Returns the resolved entity, if the lookup succeeded.
    pub fn found(&self) -> Option<&T> {
        match self {
            Resolved::Found(value) => Some(value),
            Resolved::Missing(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resolved::Missing(_))
    }
}

/// Read-only lookup over a [`Catalog`].
///
/// All lookups are linear scans; catalogs are project-scoped and small enough
/// that an index would not pay for itself. Every `*_label` helper follows the
/// fail-soft contract: an unresolved id yields a sentinel label, never a panic.
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Looks up a service by id across every domain's service list.
    pub fn service(&self, id: &str) -> Resolved<&'a Service> {
        for domain in &self.catalog.domains {
            if let Some(service) = domain.services.iter().find(|s| s.id == id) {
                return Resolved::Found(service);
            }
        }
        Resolved::Missing(id.to_string())
    }

    pub fn actor(&self, id: &str) -> Resolved<&'a Actor> {
        match self.catalog.actors.iter().find(|a| a.id == id) {
            Some(actor) => Resolved::Found(actor),
            None => Resolved::Missing(id.to_string()),
        }
    }

    pub fn integration_type(&self, id: &str) -> Resolved<&'a IntegrationType> {
        match self.catalog.integration_types.iter().find(|t| t.id == id) {
            Some(kind) => Resolved::Found(kind),
            None => Resolved::Missing(id.to_string()),
        }
    }

    pub fn domain(&self, id: &str) -> Resolved<&'a ServiceDomain> {
        match self.catalog.domains.iter().find(|d| d.id == id) {
            Some(domain) => Resolved::Found(domain),
            None => Resolved::Missing(id.to_string()),
        }
    }

    /// The display name of a service: its name, falling back to the short
    /// code when the name is empty.
    pub fn service_label(&self, id: &str) -> String {
        match self.service(id) {
            Resolved::Found(service) if !service.name.is_empty() => service.name.clone(),
            Resolved::Found(service) => service
                .code
                .clone()
                .unwrap_or_else(|| UNKNOWN_SERVICE.to_string()),
            Resolved::Missing(_) => UNKNOWN_SERVICE.to_string(),
        }
    }

    /// The compact name of a service: its short code, falling back to the
    /// full name. Used for sequence-diagram participants.
    pub fn service_short(&self, id: &str) -> String {
        match self.service(id) {
            Resolved::Found(service) => match &service.code {
                Some(code) if !code.is_empty() => code.clone(),
                _ => service.name.clone(),
            },
            Resolved::Missing(_) => UNKNOWN_SERVICE.to_string(),
        }
    }

    /// The display label of an actor: `"<code> - <name>"`.
    pub fn actor_label(&self, id: &str) -> String {
        match self.actor(id) {
            Resolved::Found(actor) => format!("{} - {}", actor.code, actor.name),
            Resolved::Missing(_) => UNKNOWN_ACTOR.to_string(),
        }
    }

    /// The short code of an actor, for sequence-diagram participants.
    pub fn actor_short(&self, id: &str) -> String {
        match self.actor(id) {
            Resolved::Found(actor) => actor.code.clone(),
            Resolved::Missing(_) => UNKNOWN_ACTOR.to_string(),
        }
    }

    pub fn integration_type_label(&self, id: &str) -> String {
        match self.integration_type(id) {
            Resolved::Found(kind) => kind.name.clone(),
            Resolved::Missing(_) => UNKNOWN_TYPE.to_string(),
        }
    }

    pub fn domain_label(&self, id: &str) -> String {
        match self.domain(id) {
            Resolved::Found(domain) => domain.name.clone(),
            Resolved::Missing(_) => UNKNOWN_DOMAIN.to_string(),
        }
    }
}
