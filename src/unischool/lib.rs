//! # Unischool Architecture
//!
//! Unischool puts three unrelated school systems (attendance, grading,
//! library) behind one interface so a single menu can drive all of them.
//! Each system keeps its own operation name; an adapter translates it into
//! the shared `integrate` call.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses flags, sets up logging, loads config              │
//! │  - The ONLY place that knows about exit codes               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Menu / prompt / read / render loop over any Read + Write │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) → Commands (commands/*.rs)                    │
//! │  - Routes a parsed selection, returns a CmdResult           │
//! │  - No I/O                                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Adapters (adapters/) over Subsystems (systems.rs)          │
//! │  - SchoolManagementApp trait, one adapter per system        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Adapters and subsystems**: each adapter forwards unchanged and is
//!    deterministic.
//! 2. **API**: recording adapters verify that each choice reaches exactly one
//!    adapter.
//! 3. **Session**: scripted input through a `Cursor`, output captured in a
//!    `Vec<u8>`.
//! 4. **Binary** (`tests/`): `assert_cmd` drives the real executable over
//!    stdin.
//!
//! ## Module Overview
//!
//! - [`systems`]: the stub subsystems
//! - [`adapters`]: the uniform capability and its three adapters
//! - [`menu`]: menu choices, token parsing and reading
//! - [`commands`]: per-action results and messages
//! - [`api`]: the dispatch facade
//! - [`session`]: the interactive loop
//! - [`config`]: configuration file handling
//! - [`error`]: error types

pub mod adapters;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod session;
pub mod systems;
