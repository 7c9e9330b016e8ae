//! Application module: glues the archive store, the navigation state and
//! the playback session together.
//!
//! The `App` model lives in `app::model` and enforces the cross-component
//! invariants: deleting the open album clears the selection and stops
//! playback, updates reconcile a stale track selection, and imports that
//! drop the open album reset navigation.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
