//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `Header`: Top bar showing app name, status, and theme marker
//! - `SearchBar`: The filter query with a cursor
//! - `NavBar`: Bottom tab switcher
//! - `CallsPanel` / `ProfilePanel`: Static placeholder panels
//!
//! ### Stateful Components (Persistent State)
//!
//! Components whose presentation state outlives a frame:
//! - `ChatList`: Scrollable roster with a selection cursor
//! - `Conversation`: Open-chat view with cached bubble waveforms
//!
//! ## Design Philosophy
//!
//! Components receive external data as "props" (struct fields), not by
//! directly accessing global state. This makes dependencies explicit and
//! components testable: every component test in this directory renders
//! into a `TestBackend` and asserts on the buffer text.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (top bar)
//! ├── search_bar.rs    (filter query display)
//! ├── chat_list.rs     (scrollable roster)
//! ├── conversation.rs  (open chat + recording controls)
//! ├── waveform.rs      (shared bar math)
//! ├── nav_bar.rs       (bottom tabs)
//! ├── calls.rs         (calls placeholder)
//! └── profile.rs       (profile placeholder)
//! ```

pub mod calls;
pub mod chat_list;
pub mod conversation;
pub mod header;
pub mod nav_bar;
pub mod profile;
pub mod search_bar;
pub mod waveform;

pub use calls::CallsPanel;
pub use chat_list::{ChatList, ChatListState, ROW_HEIGHT};
pub use conversation::{Conversation, ConversationState};
pub use header::Header;
pub use nav_bar::{NAV_HEIGHT, NavBar};
pub use profile::ProfilePanel;
pub use search_bar::SearchBar;
