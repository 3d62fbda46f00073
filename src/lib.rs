//! # gameday
//!
//! Assembles baseball game records from the three Gameday XML documents of a
//! game: `boxscore.xml`, `players.xml` and `inning/inning_all.xml`.
//!
//! Two sources are supported: a local mirror of the Gameday tree, scanned for
//! a date range and resolved in parallel, or the remote service, queried for
//! one specific game.
//!
//! ## Architecture
//!
//! ```text
//!  files:  ┌─────────┐   ┌───────────┐   ┌──────────────────┐
//!          │ Locator │──▶│ Partition │──▶│ Batch workers ×N │──┐
//!          └─────────┘   └───────────┘   └──────────────────┘  │ channel
//!                                                              ▼
//!                                                        ┌───────────┐
//!                                                        │ ResultSet │
//!                                                        └───────────┘
//!  url:    ┌────────────────┐   ┌──────────────┐
//!          │ Remote fetcher │──▶│ Game builder │──▶ Game
//!          └────────────────┘   └──────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`teams`] | Team identifier / Gameday code registry |
//! | [`dates`] | Date parsing and zero-padded rendering |
//! | [`document`] | XML element tree |
//! | [`game`] | Game model and builder |
//! | [`locator`] | Discovery of game folders in a local mirror |
//! | [`partition`] | Order-preserving batch split |
//! | [`resolver`] | Resolution of one batch |
//! | [`aggregate`] | Parallel workers and result merge |
//! | [`pipeline`] | File-mode orchestration |
//! | [`remote`] | Single-game fetch from the Gameday service |
//! | [`render`] | Text and JSON output |
//! | [`config`] | TOML configuration |

pub mod aggregate;
pub mod config;
pub mod dates;
pub mod document;
pub mod error;
pub mod game;
pub mod locator;
pub mod models;
pub mod partition;
pub mod pipeline;
pub mod remote;
pub mod render;
pub mod resolver;
pub mod teams;
