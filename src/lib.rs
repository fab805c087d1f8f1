//! Pangoo watchface
//!
//! A single watch face for a 144x168 wearable display: clock, date,
//! battery meter and background logo. The host runtime owns the event
//! loop and drives [`WatchfaceApp`] through [`Event`]s; everything the
//! face needs back from the host goes through the [`Host`] trait.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod battery;
pub mod bluetooth;
pub mod host;
pub mod ui;
pub mod vibration;

pub use app::WatchfaceApp;
pub use host::{AccelAxis, Event, Host, TapDirection};
pub use vibration::VibePattern;
