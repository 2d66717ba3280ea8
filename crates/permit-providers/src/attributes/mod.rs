//! Attribute Provider Implementations
//!
//! Each provider registers itself in `ATTRIBUTE_PROVIDERS`; linking this
//! crate is enough to make them visible to the aggregator.
//!
//! ## Available Providers
//!
//! | Provider | Priority | Contribution |
//! |----------|----------|--------------|
//! | [`ColumnsAttributeProvider`] | 10 | Persisted columns minus the blocklist |
//! | [`DynamicFieldsAttributeProvider`] | 20 | `{dynamic_fields_attributes: [..]}` |
//! | [`MediaAttributeProvider`] | 30 | `{<name>_attachment(s)_attributes: [file, source, id, name]}` |
//! | [`AuditAttributeProvider`] | 40 | `audit_comment` |

pub mod audit;
pub mod columns;
pub mod dynamic_fields;
pub mod media;

pub use audit::AuditAttributeProvider;
pub use columns::ColumnsAttributeProvider;
pub use dynamic_fields::DynamicFieldsAttributeProvider;
pub use media::MediaAttributeProvider;
