// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The controller that turns control events into state pushes.

use crate::error::Error;
use crate::protocol::Transmit;
use crate::state::BulbRegistry;
use crate::types::{Brightness, Rgb};

/// Translates control events into registry mutations, each followed by one
/// fire-and-forget transmission of the entire registry.
///
/// The controller is the registry's single writer. Every mutating
/// operation pushes unconditionally - even when the new value equals the
/// old one - and returns before delivery resolves, so rapid events may
/// leave several pushes in flight. Each carries an owned snapshot taken at
/// dispatch time, so their completion order does not matter. Nothing is
/// ever pushed except as the direct consequence of a control event.
///
/// # Examples
///
/// ```no_run
/// use lumor_lib::{BulbController, BulbRegistry, BulbState, HttpConfig};
///
/// # async fn example() -> lumor_lib::Result<()> {
/// let registry = BulbRegistry::new().with_bulb("nightstand", BulbState::default());
/// let transmitter = HttpConfig::default().into_transmitter()?;
/// let mut controller = BulbController::new(registry, transmitter);
///
/// controller.on_toggle_changed("nightstand", false)?;
/// assert!(!controller.registry().get("nightstand").unwrap().is_on());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BulbController<T: Transmit> {
    registry: BulbRegistry,
    transmitter: T,
}

impl<T: Transmit> BulbController<T> {
    /// Creates a controller owning `registry`, pushing through
    /// `transmitter`.
    ///
    /// Construction pushes nothing; the first transmission happens on the
    /// first control event.
    pub fn new(registry: BulbRegistry, transmitter: T) -> Self {
        Self {
            registry,
            transmitter,
        }
    }

    /// Returns a read-only view of the registry.
    #[must_use]
    pub fn registry(&self) -> &BulbRegistry {
        &self.registry
    }

    /// Handles a change of a bulb's on/off control.
    ///
    /// Sets the bulb's brightness to full when `is_checked` is `true`,
    /// else to zero, leaving its color untouched, then pushes the full
    /// registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BulbNotFound`] if the registry does not know
    /// `bulb_id`; nothing is pushed in that case.
    pub fn on_toggle_changed(&mut self, bulb_id: &str, is_checked: bool) -> Result<(), Error> {
        self.set_brightness(bulb_id, Brightness::from_toggle(is_checked))
    }

    /// Sets a bulb's desired brightness and pushes the full registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BulbNotFound`] if the registry does not know
    /// `bulb_id`; nothing is pushed in that case.
    pub fn set_brightness(&mut self, bulb_id: &str, brightness: Brightness) -> Result<(), Error> {
        let state = self
            .registry
            .get_mut(bulb_id)
            .ok_or_else(|| Error::BulbNotFound(bulb_id.to_owned()))?;
        state.set_brightness(brightness);

        tracing::debug!(bulb = bulb_id, %brightness, "desired brightness changed");
        self.push_states();
        Ok(())
    }

    /// Sets a bulb's desired color and pushes the full registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BulbNotFound`] if the registry does not know
    /// `bulb_id`; nothing is pushed in that case.
    pub fn set_color(&mut self, bulb_id: &str, rgb: Rgb) -> Result<(), Error> {
        let state = self
            .registry
            .get_mut(bulb_id)
            .ok_or_else(|| Error::BulbNotFound(bulb_id.to_owned()))?;
        state.set_rgb(rgb);

        tracing::debug!(bulb = bulb_id, color = %rgb, "desired color changed");
        self.push_states();
        Ok(())
    }

    fn push_states(&self) {
        self.transmitter.dispatch(self.registry.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::ProtocolError;
    use crate::state::BulbState;

    /// Records every dispatched snapshot instead of sending it.
    #[derive(Clone, Default)]
    struct Recorder {
        sent: Arc<Mutex<Vec<BulbRegistry>>>,
    }

    impl Recorder {
        fn snapshots(&self) -> Vec<BulbRegistry> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Transmit for Recorder {
        async fn send_states(&self, states: &BulbRegistry) -> Result<(), ProtocolError> {
            self.sent.lock().unwrap().push(states.clone());
            Ok(())
        }

        fn dispatch(&self, states: BulbRegistry) {
            self.sent.lock().unwrap().push(states);
        }
    }

    fn nightstand_controller() -> (BulbController<Recorder>, Recorder) {
        let recorder = Recorder::default();
        let registry = BulbRegistry::new().with_bulb("nightstand", BulbState::default());
        (BulbController::new(registry, recorder.clone()), recorder)
    }

    #[test]
    fn construction_pushes_nothing() {
        let (_controller, recorder) = nightstand_controller();
        assert!(recorder.snapshots().is_empty());
    }

    #[test]
    fn toggle_on_pushes_full_brightness() {
        let (mut controller, recorder) = nightstand_controller();

        controller.on_toggle_changed("nightstand", true).unwrap();

        let snapshots = recorder.snapshots();
        assert_eq!(snapshots.len(), 1);
        let state = snapshots[0].get("nightstand").unwrap();
        assert_eq!(state.brightness(), Brightness::FULL);
        assert_eq!(state.rgb(), Rgb::white());
    }

    #[test]
    fn toggle_off_pushes_zero_brightness() {
        let (mut controller, recorder) = nightstand_controller();

        controller.on_toggle_changed("nightstand", false).unwrap();

        let state = recorder.snapshots()[0].get("nightstand").copied().unwrap();
        assert_eq!(state.brightness(), Brightness::OFF);
        assert_eq!(state.rgb(), Rgb::white());
    }

    #[test]
    fn toggle_sequence_pushes_one_snapshot_each() {
        let (mut controller, recorder) = nightstand_controller();

        controller.on_toggle_changed("nightstand", true).unwrap();
        controller.on_toggle_changed("nightstand", false).unwrap();
        controller.on_toggle_changed("nightstand", true).unwrap();

        let brightnesses: Vec<Brightness> = recorder
            .snapshots()
            .iter()
            .map(|snapshot| snapshot.get("nightstand").unwrap().brightness())
            .collect();
        assert_eq!(
            brightnesses,
            vec![Brightness::FULL, Brightness::OFF, Brightness::FULL],
        );
    }

    #[test]
    fn toggle_pushes_even_without_a_value_change() {
        let (mut controller, recorder) = nightstand_controller();

        // Initial state is already full brightness.
        controller.on_toggle_changed("nightstand", true).unwrap();
        controller.on_toggle_changed("nightstand", true).unwrap();

        assert_eq!(recorder.snapshots().len(), 2);
    }

    #[test]
    fn toggle_leaves_color_untouched() {
        let (mut controller, recorder) = nightstand_controller();
        let red = Rgb::new(255, 0, 0);

        controller.set_color("nightstand", red).unwrap();
        controller.on_toggle_changed("nightstand", false).unwrap();
        controller.on_toggle_changed("nightstand", true).unwrap();

        for snapshot in &recorder.snapshots()[1..] {
            assert_eq!(snapshot.get("nightstand").unwrap().rgb(), red);
        }
    }

    #[test]
    fn snapshots_are_independent_of_later_mutations() {
        let (mut controller, recorder) = nightstand_controller();

        controller.on_toggle_changed("nightstand", false).unwrap();
        controller.on_toggle_changed("nightstand", true).unwrap();

        // The first snapshot still shows the state as of its dispatch.
        let first = recorder.snapshots()[0].get("nightstand").copied().unwrap();
        assert_eq!(first.brightness(), Brightness::OFF);
    }

    #[test]
    fn unknown_bulb_is_an_error_and_pushes_nothing() {
        let (mut controller, recorder) = nightstand_controller();

        let err = controller.on_toggle_changed("porch", true).unwrap_err();
        assert!(matches!(err, Error::BulbNotFound(id) if id == "porch"));
        assert!(recorder.snapshots().is_empty());
    }

    #[test]
    fn push_carries_whole_registry() {
        let recorder = Recorder::default();
        let registry = BulbRegistry::new()
            .with_bulb("nightstand", BulbState::default())
            .with_bulb("porch", BulbState::default());
        let mut controller = BulbController::new(registry, recorder.clone());

        controller.on_toggle_changed("nightstand", false).unwrap();

        let snapshot = &recorder.snapshots()[0];
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.get("porch").unwrap().is_on());
        assert!(!snapshot.get("nightstand").unwrap().is_on());
    }

    #[test]
    fn set_brightness_accepts_intermediate_values() {
        let (mut controller, recorder) = nightstand_controller();

        controller
            .set_brightness("nightstand", Brightness::new(0.5))
            .unwrap();

        let state = recorder.snapshots()[0].get("nightstand").copied().unwrap();
        assert_eq!(state.brightness(), Brightness::new(0.5));
    }
}
