//! Watchface controller
//!
//! Owns all mutable state and binds host events to face updates. The
//! host runtime constructs one [`WatchfaceApp`] at window load, feeds
//! it [`Event`]s from its loop, and calls [`WatchfaceApp::render`]
//! whenever a handler reported that the screen changed. Dropping the
//! app releases every visual resource acquired at load.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::bluetooth::ConnectionTracker;
use crate::host::{Event, Host};
use crate::ui::PangooFace;

pub struct WatchfaceApp {
    face: PangooFace,
    connection: ConnectionTracker,
}

impl WatchfaceApp {
    /// Window-load sequence: build the face, prime time, date and
    /// battery from the host, and prime the connection flag.
    ///
    /// The connection peek runs through the same transition function
    /// as live reports; starting from `Unknown` it can never buzz.
    pub fn new<H: Host>(host: &mut H) -> Self {
        let mut face = PangooFace::new();

        let now = host.now();
        face.set_time(now, host.clock_is_24h());
        face.set_date(now);
        face.set_battery(host.peek_battery());

        let mut connection = ConnectionTracker::new();
        if let Some(pattern) = connection.on_change(host.peek_connection()) {
            host.enqueue_vibe(pattern);
        }

        Self { face, connection }
    }

    /// Dispatch one host event. Returns whether the screen needs a
    /// redraw.
    pub fn handle_event<H: Host>(&mut self, event: Event, host: &mut H) -> bool {
        match event {
            Event::MinuteTick => {
                let now = host.now();
                self.face.set_time(now, host.clock_is_24h());
                self.face.set_date(now);
                true
            }
            Event::BatteryChange { percent } => {
                #[cfg(feature = "defmt")]
                defmt::info!("battery level: {}%", percent);
                self.face.set_battery(percent);
                true
            }
            Event::ConnectionChange { connected } => {
                #[cfg(feature = "defmt")]
                defmt::info!("connection changed: {}", connected);
                if let Some(pattern) = self.connection.on_change(connected) {
                    host.enqueue_vibe(pattern);
                }
                // The connection handler only buzzes, nothing on
                // screen changes.
                false
            }
            Event::AccelTap { axis, direction } => {
                self.face.show_tap(axis, direction);
                true
            }
        }
    }

    /// Paint the whole face into the host-provided draw target.
    pub fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.face.draw(target)
    }

    pub fn face(&self) -> &PangooFace {
        &self.face
    }
}
