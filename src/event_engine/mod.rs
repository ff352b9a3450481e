// src/event_engine/mod.rs

// Event classification: turns raw event payloads into metadata, titles,
// locations and search text.
pub mod handler;
