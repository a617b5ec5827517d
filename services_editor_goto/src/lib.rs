//! # Goto Box Service
//!
//! Data-level model of the editor's goto box: the query the user is typing,
//! the target it currently resolves to, and the preview the host renders
//! while the box is open.
//!
//! ## Philosophy
//!
//! - **Data, not widgets**: The input box, decorations, and scrolling belong
//!   to the host UI; this crate only computes what they should show
//! - **Re-resolve every keystroke**: Each input change interprets the whole
//!   query from scratch against the snapshots captured when the box opened
//! - **Quiet on invalid**: A query that does not resolve keeps the box open
//!   with neutral feedback instead of surfacing an error
//! - **Restorable**: Cancelling hands back the cursor captured at open time
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - An input widget or dialog implementation
//! - A decoration or viewport renderer
//! - A keybinding layer
//! - A general command palette
//!
//! ## Design
//!
//! `GotoSession` owns the box lifecycle from open to accept or cancel.
//! `TargetPreview` is the render-ready projection of a resolved target,
//! and `SessionSnapshot` captures observable session state for parity
//! testing across hosts. Settings round-trip through a small versioned
//! JSON payload in `settings`.

pub mod preview;
pub mod session;
pub mod settings;
pub mod snapshot;

pub use preview::{HighlightSpan, RevealRequest, TargetPreview};
pub use session::{GotoSession, SessionFeedback};
pub use settings::{
    deserialize_config, load_config_safe, serialize_config, GotoSettingsData, SettingsError,
    SettingsResult,
};
pub use snapshot::SessionSnapshot;
