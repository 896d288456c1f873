//! TUI pane rendering modules
//!
//! Each pane module exports one stateless `render_*` function; the only
//! state kept between frames is the source pane's scroll position.
//!
//! # Pane Modules
//!
//! - [`array`]: bar chart for sorting steps
//! - [`search`]: value blocks with the search window for search steps
//! - [`tree`]: recursion tree for divide-and-conquer runs
//! - [`source`]: pseudocode with the active line highlighted
//! - [`info`]: algorithm card and step description
//! - [`status`]: status bar with keybindings and playback state

pub mod array;
pub mod info;
pub mod search;
pub mod source;
pub mod status;
pub mod tree;

pub use array::render_array_pane;
pub use info::render_info_pane;
pub use search::render_search_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, RunState, StatusRenderData};
pub use tree::render_tree_pane;
