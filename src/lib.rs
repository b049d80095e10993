//! NBA Stats CLI Library
//!
//! Look up basketball players through public sports-data APIs and print
//! what comes back in the terminal.
//!
//! ## Features
//!
//! - **Player Search**: name search with interactive disambiguation
//! - **Game Logs**: season box scores charted per stat with averages
//! - **Player Details**: team, position, birth date and bio
//! - **Explicit Outcomes**: client calls return [`api::Lookup`] instead of
//!   hiding failures behind empty values
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_stats::api::{balldontlie::{BallDontLie, BASE_URL}, search_player, Lookup};
//!
//! # async fn example() -> nba_stats::Result<()> {
//! let api = BallDontLie::new(BASE_URL)?;
//! if let Lookup::Found(players) = search_player(&api, "LeBron James").await {
//!     for p in players {
//!         println!("{} ({})", p.name, p.team);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at a different API host:
//! ```bash
//! export NBA_STATS_BASE_URL=http://localhost:8080/api/v1
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod render;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use api::{Lookup, PlayerApi, PlayerDetail, PlayerReport, PlayerSummary};
pub use cli::types::{DataSource, PlayerId};
pub use error::{Result, StatsError};
pub use stats::{GameStat, StatKind};

pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
