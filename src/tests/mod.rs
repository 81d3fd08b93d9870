//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the whole app through the acceptance harness and can
//! reach into crate-private state to check what the user would see.


mod acceptance_view_full;
