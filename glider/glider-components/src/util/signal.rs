use std::ops::Not;

use leptos::prelude::*;

/// Flips a boolean signal in place.
///
/// The usual reaction of a container whose state of record is the same
/// signal it hands to a [`ToggleSlider`](crate::ToggleSlider).
pub trait ToggleSignal {
    fn toggle(&self);
}

impl ToggleSignal for RwSignal<bool> {
    fn toggle(&self) {
        self.update(|value| *value = value.not())
    }
}

/// Derives a signal which follows a boolean signal,
/// yielding `on` while the source is `true` and `off` otherwise.
pub trait Toggled {
    fn derive_toggled<T>(self, on: T, off: T) -> Signal<T>
    where T: Clone + Send + Sync + 'static;
}

impl Toggled for Signal<bool> {
    fn derive_toggled<T>(self, on: T, off: T) -> Signal<T>
    where T: Clone + Send + Sync + 'static {
        derive_toggled(self, on, off)
    }
}

impl Toggled for RwSignal<bool> {
    fn derive_toggled<T>(self, on: T, off: T) -> Signal<T>
    where T: Clone + Send + Sync + 'static {
        let signal = Signal::from(self);
        derive_toggled(signal, on, off)
    }
}

fn derive_toggled<T>(signal: Signal<bool>, on: T, off: T) -> Signal<T>
where T: Clone + Send + Sync + 'static {
    Signal::derive(move || {
        if signal.get() {
            Clone::clone(&on)
        } else {
            Clone::clone(&off)
        }
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_toggle_flips_the_value() {
        let value = RwSignal::new(false);

        value.toggle();
        assert!(value.get_untracked());

        value.toggle();
        assert!(!value.get_untracked());
    }

    #[test]
    fn test_derive_toggled_follows_the_source_signal() {
        let value = RwSignal::new(true);
        let status = value.derive_toggled("active", "inactive");

        assert_eq!(status.get_untracked(), "active");

        value.set(false);
        assert_eq!(status.get_untracked(), "inactive");
    }
}
