//! Application layer: filter state, actions, and the reducer between them.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! UI picks → FilterAction → reduce() → FilterState → display view / query params
//!                              ↑                          │
//!                              └──── next user action ────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: The closed set of inputs the reducer understands
//! - [`state`]: The reconciliation state value
//! - [`reducer`]: The total transition function
//! - [`reconcile`]: Keyed union helpers shared by reducer and display view
//! - [`display`]: Derived "currently checked" options
//! - [`params`]: Applied filters translated into query parameters
//! - [`store`]: State + dispatch pair for a hosting screen
//!
//! # Example
//!
//! ```rust
//! use artwork_filters::app::{FilterAction, FilterStore};
//!
//! let mut store = FilterStore::new();
//! let state = store.dispatch(FilterAction::Commit);
//! assert!(state.apply_filters);
//! ```

pub mod actions;
pub mod display;
pub mod params;
pub mod reconcile;
pub mod reducer;
pub mod state;
pub mod store;

pub use actions::FilterAction;
pub use display::selected_options_union;
pub use params::FilterParams;
pub use reducer::reduce;
pub use state::FilterState;
pub use store::FilterStore;
