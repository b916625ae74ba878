#![doc = "gittomd-core: turn a repository's working tree into one Markdown document."]

//! This crate holds the whole repository-to-document pipeline:
//! classification of names, the tree walk, ordering and assembly of the
//! document, plus the acquisition seam that supplies a root directory.
//!
//! # Usage
//! Most callers want [`pipeline::generate`]; [`document::render_repository`]
//! works directly on a directory that is already on disk.

pub mod acquire;
pub mod classify;
pub mod collate;
pub mod config;
pub mod contract;
pub mod document;
pub mod pipeline;
pub mod repo_id;
pub mod walk;
