mod live_events;

pub use live_events::*;
