//! Contact form submission
//!
//! - `controller`: pending/outcome state machine for one form
//! - `transport`: async delivery seam and the simulated transport
//! - `outcome`: success/failure results and observable state

mod controller;
mod error;
mod outcome;
mod transport;

pub use controller::SubmissionController;
pub use error::SubmitError;
pub use outcome::{SubmissionOutcome, SubmissionState};
pub use transport::{SimulatedTransport, SubmitTransport, DEFAULT_LATENCY};

#[cfg(test)]
pub use transport::MockSubmitTransport;
