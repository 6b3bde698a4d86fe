//! vanishing-notes library
//!
//! Core of a note-taking tool with gradual expiry: notes fade as they go
//! unaccessed and are swept away once they outlive the retention window.
//! This crate covers the note lifecycle, decay engine, expiry sweep,
//! schema migration, preview snippets, and persistence; rendering and
//! editing UI live elsewhere.

pub mod config;
pub mod error;
pub mod notes;
pub mod services;
pub mod storage;
