//! Fire-and-forget task spawning.
//!
//! The browser build hands futures to the Leptos local executor. Native
//! builds have no UI event loop, so the future is dropped unpolled; the state
//! layer is exercised there by awaiting controller methods directly.

use std::future::Future;

pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(future);

    #[cfg(not(feature = "csr"))]
    {
        log::debug!("no local executor outside the browser; task dropped");
        drop(future);
    }
}
