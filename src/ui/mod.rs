//! Terminal inspector built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — inspector state, keyboard event loop, pane focus
//! - **[`panes`]** — stateless render functions for the tree pane, the symbol
//!   pane and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`CompileContext`] and call [`App::run`] to start the event loop. The
//! inspector only reads the context.
//!
//! [`CompileContext`]: crate::context::CompileContext
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
