//! momentum-store: typed record storage for Momentum
//!
//! Canonical records in, canonical records out. Loose upstream shapes are
//! normalized exactly once, at this boundary; the whole store serializes
//! to a single JSON snapshot.

pub mod collection;
pub mod error;
pub mod journal;
pub mod project;
pub mod record;
pub mod resource;
pub mod rules;
pub mod store;

pub use collection::{Collection, Record};
pub use error::{StoreError, StoreResult};
pub use journal::JournalEntry;
pub use project::{Project, ProjectStatus, ProjectTask};
pub use record::{normalize, RawId, RawTaskRecord};
pub use resource::Resource;
pub use rules::{Frequency, GenerationRule, TaskTemplate};
pub use store::{RecordStore, UserBadge};
