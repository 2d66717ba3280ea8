//! Application use cases

/// CRUD attribute aggregation
pub mod crud_attributes_service;

pub use crud_attributes_service::CrudAttributesService;
