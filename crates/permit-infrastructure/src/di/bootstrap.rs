//! Bootstrap - configuration to aggregation service
//!
//! ```text
//! AppConfig → AttributeProviderConfig → CrudAttributesService
//!                                              ↑
//!                                     linkme provider registry
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//!
//! // At model preparation time
//! context.prepare_models(&[&article, &ticket])?;
//!
//! // In mass-assignment code
//! if let Some(whitelist) = context.crud_attributes().crud_attributes("Article") { .. }
//! ```

// Force linkme registration of all providers from permit-providers
extern crate permit_providers;

use crate::config::AppConfig;
use permit_application::ports::registry::list_attribute_providers;
use permit_application::ports::services::CrudAttributesServiceInterface;
use permit_application::use_cases::CrudAttributesService;
use permit_domain::error::Result;
use permit_domain::ports::ModelType;
use std::sync::Arc;
use tracing::info;

/// Application context holding configuration and the aggregation service
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    crud_attributes: Arc<CrudAttributesService>,
}

impl AppContext {
    /// Get the CRUD attributes service
    pub fn crud_attributes(&self) -> Arc<dyn CrudAttributesServiceInterface> {
        self.crud_attributes.clone()
    }

    /// Names of models with a published whitelist
    pub fn published_models(&self) -> Vec<String> {
        self.crud_attributes.published_models()
    }

    /// Registered providers as (name, description), in aggregation order
    pub fn available_providers(&self) -> Vec<(&'static str, &'static str)> {
        list_attribute_providers()
    }

    /// Define the whitelist of every model, in order
    ///
    /// Returns how many models ended up with a published whitelist. Models
    /// whose preconditions fail are skipped; any other error stops the run.
    pub fn prepare_models(&self, models: &[&dyn ModelType]) -> Result<usize> {
        let mut published = 0;
        for model in models {
            if self.crud_attributes.define_crud_attributes(*model)?.is_some() {
                published += 1;
            }
        }
        info!(
            published,
            total = models.len(),
            "Prepared CRUD attributes for models"
        );
        Ok(published)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("crud_attributes", &self.crud_attributes)
            .finish()
    }
}

/// Build the application context from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let provider_config = config.attributes.provider_config();
    let crud_attributes = Arc::new(CrudAttributesService::new(
        provider_config,
        config.attributes.redefinition,
    ));

    info!(
        providers = list_attribute_providers().len(),
        redefinition = ?config.attributes.redefinition,
        "Initialized CRUD attributes service"
    );

    Ok(AppContext {
        config: Arc::new(config),
        crud_attributes,
    })
}
