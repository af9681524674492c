mod clock;
mod session;
mod ticker;

pub use clock::SessionClock;
pub use session::{SessionConfig, SessionKind, DEFAULT_BREAK_MIN, DEFAULT_WORK_MIN};
pub use ticker::{TickSignal, Ticker, TICK_PERIOD};
