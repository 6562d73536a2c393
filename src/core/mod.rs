//! core
//!
//! Core domain types and configuration for jira-pilot.
//!
//! # Modules
//!
//! - [`types`] - Jira connection settings and created issues
//! - [`config`] - Application configuration schema and loading

pub mod config;
pub mod types;
