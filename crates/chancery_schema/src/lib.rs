//! Record Schema System
//!
//! # Philosophy: one engine, many modules
//!
//! Every Chancery module (citizens, assets, accounts, ...) is the same
//! machine with different data:
//!
//! 1. **Schema**: a fixed field list plus, for some modules, dynamic
//!    sub-fields selected by a discriminator value
//! 2. **Table view**: filter / sort / dynamic-column projection over the
//!    collection
//! 3. **Form**: seeded from a record (or defaults), validated declaratively,
//!    coerced by field kind, normalized on submit
//!
//! No module ships its own table or form code. A module is configuration:
//! schemas, reference lists, rules, seeds. The engines in this crate do the
//! rest.
//!
//! # Modules
//!
//! - [`record`]: scalar [`Value`] and the [`Record`] map with its reserved
//!   `extra_data` sub-map
//! - [`reference`]: immutable id -> label lookup tables
//! - [`fields`]: fixed and dynamic field schemas
//! - [`table`]: filtering, sorting, and dynamic column derivation
//! - [`form`]: form state, validation rules, coercion, submit
//! - [`blob`]: attachment storage behind a reference, not inline bytes

pub mod blob;
pub mod fields;
pub mod form;
pub mod record;
pub mod reference;
pub mod table;

pub use blob::{BlobError, BlobRef, BlobStore, MemoryBlobStore};
pub use fields::{DynamicField, DynamicFieldSchema, FieldKind, FieldSchema, ModuleSchema};
pub use form::{FormMode, FormState, Rule};
pub use record::{Record, Value};
pub use reference::{ReferenceEntry, ReferenceList};
pub use table::{dynamic_columns, DynamicColumn, Filter, SortDirection, TableQuery};
