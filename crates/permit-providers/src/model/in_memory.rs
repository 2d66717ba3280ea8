//! In-memory model type
//!
//! A `ModelType` adapter holding its schema and configuration in memory.
//! Used by tooling that has no database at hand and by tests, including
//! simulated "table not created yet" and "database unreachable" states.

use permit_domain::error::{Error, Result};
use permit_domain::ports::ModelType;
use permit_domain::value_objects::{FieldDefinition, ModelConfiguration};

/// In-memory model type
#[derive(Debug, Clone)]
pub struct InMemoryModel {
    name: String,
    columns: Vec<String>,
    configuration: Option<ModelConfiguration>,
    table_exists: bool,
    persistence_available: bool,
    audit_justification: bool,
}

impl InMemoryModel {
    /// Create a provisioned model with no columns and no configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            configuration: None,
            table_exists: true,
            persistence_available: true,
            audit_justification: false,
        }
    }

    /// Set the persisted columns
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the configuration
    pub fn with_configuration(mut self, configuration: ModelConfiguration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// Append a configured field, creating the configuration if needed
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.configuration
            .get_or_insert_with(ModelConfiguration::default)
            .fields
            .push(field);
        self
    }

    /// Require an audit justification for changes
    pub fn with_audit_justification(mut self, required: bool) -> Self {
        self.audit_justification = required;
        self
    }

    /// Simulate a schema that has not been provisioned
    pub fn without_table(mut self) -> Self {
        self.table_exists = false;
        self
    }

    /// Simulate an unreachable persistence layer
    pub fn with_persistence_unavailable(mut self) -> Self {
        self.persistence_available = false;
        self
    }

    fn ensure_available(&self) -> Result<()> {
        if self.persistence_available {
            Ok(())
        } else {
            Err(Error::persistence_unavailable(format!(
                "database for model '{}' does not exist",
                self.name
            )))
        }
    }
}

impl ModelType for InMemoryModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn table_exists(&self) -> Result<bool> {
        self.ensure_available()?;
        Ok(self.table_exists)
    }

    fn configuration(&self) -> Result<Option<ModelConfiguration>> {
        self.ensure_available()?;
        Ok(self.configuration.clone())
    }

    fn column_names(&self) -> Result<Vec<String>> {
        self.ensure_available()?;
        if !self.table_exists {
            return Ok(Vec::new());
        }
        Ok(self.columns.clone())
    }

    fn requires_audit_justification(&self) -> bool {
        self.audit_justification
    }
}
