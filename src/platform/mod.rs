//! Host-side platform helpers
//!
//! The simulation never reads a clock. Hosts translate wall-clock frame time
//! into a whole number of fixed ticks here.

pub mod clock;

pub use clock::FixedStepClock;
