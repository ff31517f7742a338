//! Config composition: defaults policy and the merge service.

pub(crate) mod merge_policy;
pub mod service;
