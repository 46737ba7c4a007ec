mod backend_config;
#[allow(clippy::module_inception)]
mod config;
mod events_config;
mod session_config;

pub(crate) use {
    backend_config::BackendConfig, config::Config, events_config::EventsConfig,
    session_config::SessionConfig,
};

pub(crate) const DEFAULT_TICK_INTERVAL_MS: u64 = 200;
pub(crate) const DEFAULT_BUS_CAPACITY: usize = 256;
pub(crate) const DEFAULT_INBOX_CAPACITY: usize = 32;
pub(crate) const DEFAULT_PHRASE_INTERVAL_MS: u64 = 1500;

pub(crate) fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

pub(crate) fn default_bus_capacity() -> usize {
    DEFAULT_BUS_CAPACITY
}

pub(crate) fn default_inbox_capacity() -> usize {
    DEFAULT_INBOX_CAPACITY
}

pub(crate) fn default_phrase_interval_ms() -> u64 {
    DEFAULT_PHRASE_INTERVAL_MS
}

pub(crate) fn default_phrases() -> Vec<String> {
    [
        "this is a voice memo",
        "recorded from the terminal",
        "and transcribed as it goes",
    ]
    .iter()
    .map(|phrase| phrase.to_string())
    .collect()
}
