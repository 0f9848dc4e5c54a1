//! sea-orm entities for the wellness service.

pub mod assessments;
pub mod consents;
pub mod progress_entries;
pub mod sessions;
