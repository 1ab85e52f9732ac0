// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window close requests are routed through the update loop so composer
//! teardown can release attachment resources before the window goes away.

use super::Message;
use iced::{event, time, Subscription};

/// Creates the native event subscription.
///
/// Only window close requests are of interest; everything else stays with
/// the widgets that produced it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// The timer only runs while notifications are showing; an idle app gets
/// no wakeups.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
