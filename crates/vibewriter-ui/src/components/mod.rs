//! Yew components for the status page.

pub(crate) mod status_view;
