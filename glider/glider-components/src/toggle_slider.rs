use std::ops::Not;

use leptos::either::Either;
use leptos::ev;
use leptos::prelude::*;

/// Visual state of a [`ToggleSlider`]. A slider is in exactly one of
/// the two states at any time, selected by the value it displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderState {
    On,
    Off,
}

impl SliderState {
    pub fn as_class(&self) -> &'static str {
        match self {
            SliderState::On => "on",
            SliderState::Off => "off",
        }
    }
}

impl From<bool> for SliderState {
    fn from(value: bool) -> Self {
        if value {
            SliderState::On
        } else {
            SliderState::Off
        }
    }
}

/// A binary on/off switch rendered as a sliding control.
///
/// The slider never owns its value. It renders whatever `value` holds and,
/// when activated, proposes the negated value through `on_change`. The owning
/// component decides whether to store the proposal and the slider follows
/// through the signal it was given. Without an `on_change` the control
/// renders normally but ignores activation.
///
/// Clicks are fully swallowed: the default browser action is suppressed and
/// the event does not propagate to ancestor elements.
#[component]
pub fn ToggleSlider(
    #[prop(into)] value: Signal<bool>,
    #[prop(into)] on_label: Signal<String>,
    #[prop(into)] off_label: Signal<String>,
    #[prop(optional_no_strip)] on_change: Option<Callback<bool>>,
) -> impl IntoView {

    view! {
        <div
            class=move || format!("slider {}", SliderState::from(value.get()).as_class())
            on:click=move |event: ev::MouseEvent| {
                event.prevent_default();
                event.stop_propagation();
                if let Some(on_change) = on_change {
                    on_change.run(value.get().not());
                }
            }
        >
            {move || match SliderState::from(value.get()) {
                SliderState::On => Either::Left(view! {
                    <span>
                        <span class="ball on"></span>
                        <span class="label on">{ on_label }</span>
                    </span>
                }),
                SliderState::Off => Either::Right(view! {
                    <span>
                        <span class="label off">{ off_label }</span>
                        <span class="ball off"></span>
                    </span>
                }),
            }}
        </div>
    }
}

#[cfg(test)]
mod test {
    use super::SliderState;

    #[test]
    fn test_slider_state_is_a_total_function_of_the_value() {
        assert_eq!(SliderState::from(true), SliderState::On);
        assert_eq!(SliderState::from(false), SliderState::Off);
    }

    #[test]
    fn test_slider_state_classes_are_mutually_exclusive() {
        assert_eq!(SliderState::On.as_class(), "on");
        assert_eq!(SliderState::Off.as_class(), "off");
        assert_ne!(SliderState::On.as_class(), SliderState::Off.as_class());
    }
}
