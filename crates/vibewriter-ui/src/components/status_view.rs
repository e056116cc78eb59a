//! Status heading view.
//!
//! # Design
//! - Issue the health request once, from the mount effect.
//! - Keep the heading text pure; failures render below it, never inside it.

use crate::config::HealthEndpoint;
use crate::core::controller::StatusController;
use crate::core::status::{StatusPhase, heading_text};
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;

#[function_component(StatusView)]
pub(crate) fn status_view() -> Html {
    let phase = use_state(StatusPhase::default);
    let controller = use_memo(
        |_| {
            HealthEndpoint::from_build_env()
                .map(|endpoint| Rc::new(StatusController::new(ApiClient::new(endpoint))))
        },
        (),
    );

    {
        let phase = phase.clone();
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                match &*controller {
                    Ok(controller) => {
                        let controller = Rc::clone(controller);
                        yew::platform::spawn_local(async move {
                            if let Some(next) = controller.run().await {
                                if let Some(err) = next.error() {
                                    console::error!("health status unresolved", err.to_string());
                                }
                                phase.set(next);
                            }
                        });
                    }
                    Err(err) => {
                        console::error!("health endpoint not configured", err.to_string());
                        phase.set(StatusPhase::Pending.settle(Err(err.clone().into())));
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="status-view">
            <h1>{heading_text(&phase)}</h1>
            {if let Some(err) = phase.error() {
                html! { <p class="muted status-error">{err.to_string()}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
