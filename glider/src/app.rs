use std::ops::Not;

use leptos::either::EitherOf3;
use leptos::prelude::*;
use tracing::{debug, warn};
use wasm_bindgen_futures::spawn_local;

use glider_components::{ToggleSlider, Toggled};

use crate::config::{ConfigError, PanelConfig, SwitchConfig};

#[component]
pub fn App() -> impl IntoView {

    let config = RwSignal::new(None::<Result<PanelConfig, ConfigError>>);

    spawn_local(async move {
        let result = PanelConfig::load().await;
        if let Err(ref cause) = result {
            warn!("Loading the panel configuration failed: {cause}");
        }
        config.set(Some(result));
    });

    view! {
        <div class="container">
            {move || match config.get() {
                None => EitherOf3::A(view! {
                    <p class="panel-loading">"Loading configuration..."</p>
                }),
                Some(Err(cause)) => EitherOf3::B(view! {
                    <div class="notification is-danger">
                        <p>{ cause.to_string() }</p>
                    </div>
                }),
                Some(Ok(config)) => EitherOf3::C(view! {
                    <SwitchPanel config />
                }),
            }}
        </div>
    }
}

#[component]
fn SwitchPanel(config: PanelConfig) -> impl IntoView {

    let rows = config.switches.into_iter()
        .map(|switch| view! { <SwitchRow switch /> })
        .collect_view();

    view! {
        <h1 class="title">{ config.title }</h1>
        <div class="switch-panel">{ rows }</div>
    }
}

/// One row of the panel. The row owns the state of record for its switch;
/// the slider only proposes changes to it.
#[component]
fn SwitchRow(switch: SwitchConfig) -> impl IntoView {

    let value = RwSignal::new(switch.initial);
    let status = value.derive_toggled("active", "inactive");

    let on_change = switch.locked.not().then(|| {
        let name = Clone::clone(&switch.name);
        Callback::new(move |next: bool| {
            debug!("Switch '{name}' changed to {next}.");
            value.set(next);
        })
    });

    view! {
        <div class="switch-row">
            <span class="switch-name">{ Clone::clone(&switch.name) }</span>
            <ToggleSlider
                value
                on_label=switch.on_label
                off_label=switch.off_label
                on_change
            />
            <span class="switch-status">{ status }</span>
        </div>
    }
}
