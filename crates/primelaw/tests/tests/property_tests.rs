#[path = "property/determinism.rs"]
mod determinism;

#[path = "property/record_laws.rs"]
mod record_laws;

#[path = "property/snapshot_resume.rs"]
mod snapshot_resume;

#[path = "property/cache_consistency.rs"]
mod cache_consistency;
