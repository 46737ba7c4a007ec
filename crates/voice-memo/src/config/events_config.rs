use crate::config::{default_bus_capacity, default_inbox_capacity};

use serde::{Deserialize, Serialize};

/// Event delivery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Events a bus listener may fall behind by before events are dropped.
    #[serde(default = "default_bus_capacity")]
    pub bus_capacity: usize,

    /// Pending messages the controller inbox holds before senders wait.
    #[serde(default = "default_inbox_capacity")]
    pub inbox_capacity: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            bus_capacity: default_bus_capacity(),
            inbox_capacity: default_inbox_capacity(),
        }
    }
}
