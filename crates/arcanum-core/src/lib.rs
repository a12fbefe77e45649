//! Core types for the Arcanum game-master toolkit.
//!
//! Provides the vocabulary shared by the environment engine and its
//! frontends: terrain [`Region`]s, in-fiction [`GameTime`], and the keyed
//! JSON [`StateStore`] used to persist session state between invocations.

/// Error types for the core crate.
pub mod error;
/// Terrain/setting regions that drive weather and event tables.
pub mod region;
/// Keyed JSON persistence for session state.
pub mod store;
/// In-fiction time derived from elapsed game minutes.
pub mod time;

/// Re-exports of [`error::CoreError`] and [`error::CoreResult`].
pub use error::{CoreError, CoreResult};
/// Re-export of [`region::Region`].
pub use region::Region;
/// Re-export of [`store::StateStore`].
pub use store::StateStore;
/// Re-exports of [`time::GameTime`] and [`time::TimeOfDay`].
pub use time::{GameTime, TimeOfDay};
