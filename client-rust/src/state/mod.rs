//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page session (`branches`, `recordings`, `console`) so
//! each surface owns its former script globals: the branch status mirror,
//! the recordings in-flight flag, and the console configuration record.

pub mod branches;
pub mod console;
pub mod recordings;
