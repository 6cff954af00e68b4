//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic ordered contact book**. The library owns an ordered list of
//! contacts, keeps a persisted copy of it in step, and supports inline editing,
//! search, and drag-and-drop reordering. The `rolo` binary is one client; the
//! [`markup`] renderer exists for clients that draw HTML.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints                        │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the ContactBook                       │
//! │  - Asks collaborators (surface.rs) for confirmation, etc.   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validate, mutate, persist, return CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State + Storage (session.rs, collection.rs, store/)        │
//! │  - ContactBook: collection, edit session, drag, search      │
//! │  - DataStore: FileStore (production), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Canonical Indexes
//!
//! A contact is addressed by its position in the full collection. Filtered views keep
//! those positions (see [`index`]), so an action taken on a search result hits the
//! right contact. Internally the edit session and the drag source hold a synthetic id
//! instead, so they survive other rows moving underneath them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`session`]: `ContactBook`, the per-instance state
//! - [`collection`]: The ordered collection and its persistence
//! - [`index`]: Canonical indexes and the filter view
//! - [`reorder`]: Drag-and-drop index arithmetic and drag state
//! - [`validation`]: Field rules
//! - [`markup`]: HTML rendering with escaping
//! - [`surface`]: Traits for the host's form, list, prompt, and message area
//! - [`flash`]: Expiring status messages
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Contact` and `Entry`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod flash;
pub mod index;
pub mod markup;
pub mod model;
pub mod reorder;
pub mod session;
pub mod store;
pub mod surface;
pub mod validation;
