//! Browser entry point.

use crate::components::status_view::StatusView;

/// Mount the status page into `#root`, or `<body>` when the host page has no root.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<StatusView>::with_root(root).render();
    } else {
        yew::Renderer::<StatusView>::new().render();
    }
}
