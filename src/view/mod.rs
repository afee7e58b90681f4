//! The URL list view: state, the controller that mutates it, and the
//! cancellation plumbing behind mount/unmount.

mod cancel;
mod controller;
pub mod format;
mod state;

pub use controller::{RequestOutcome, SubmitOutcome, ViewController};
pub use state::ViewState;
