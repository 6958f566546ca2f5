//! Static timing analysis for the virtual FPGA CAD back-end.
//!
//! Given a fabric and the nets [`vfpga_pnr::route`] produced, [`analyze`]
//! propagates arrival times forward through the routed design and reports
//! the critical path and the frequency it bounds.

#![warn(missing_docs)]

pub mod error;
pub mod sta;

pub use error::TimingError;
pub use sta::{analyze, TimingResult, DEFAULT_LUT_DELAY_PS};
