mod channel;
mod event_bus;
mod notification_bridge;

pub use {
    channel::{EventChannel, PARTIAL_TRANSCRIPT, RECORDING_ERROR},
    event_bus::{DEFAULT_BUS_CAPACITY, EventBus},
    notification_bridge::NotificationBridge,
};
