//! Backend client module for storing responses and share links

mod client;
mod traits;

pub use client::{BackendError, NewResponse, NewShare, RestBackend, ShareRecord};
pub use traits::FormBackend;

#[cfg(test)]
pub use traits::MockFormBackend;
