pub mod clock;
pub mod controller;
pub mod guard;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{LoginOutcome, SessionController, SessionState};
pub use guard::{FailureOutcome, LoginGuard};
