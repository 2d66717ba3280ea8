//! Model Type Port
//!
//! The model side of whitelist derivation. Implementations adapt whatever
//! persistence layer backs the model; providers only see this trait.

use crate::error::Result;
use crate::value_objects::ModelConfiguration;

/// A model type whose whitelist can be derived
///
/// Methods returning [`Result`] may fail with
/// [`Error::PersistenceUnavailable`](crate::Error::PersistenceUnavailable)
/// when the data layer itself cannot be reached. An absent configuration is
/// `Ok(None)`, not an error.
pub trait ModelType: Send + Sync {
    /// Name the whitelist is published under
    fn model_name(&self) -> &str;

    /// Whether the backing store has been provisioned
    fn table_exists(&self) -> Result<bool>;

    /// Stored field configuration, if any
    fn configuration(&self) -> Result<Option<ModelConfiguration>>;

    /// Persisted column names in schema order
    fn column_names(&self) -> Result<Vec<String>>;

    /// Whether changes to this model must carry an audit justification
    fn requires_audit_justification(&self) -> bool;
}
