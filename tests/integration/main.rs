//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific part of the
//! poll loop against mock adapters.  All tests run on the host with no
//! real hardware required.

mod mock_hw;
mod rig;
mod service_tests;
