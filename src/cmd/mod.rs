//! CLI command implementations.
//!
//! | Module   | Commands handled    |
//! |----------|---------------------|
//! | `submit` | `Submit`            |
//! | `watch`  | `Watch`, `Status`   |

pub mod submit;
pub mod watch;

pub use submit::cmd_submit;
pub use watch::{cmd_status, cmd_watch};
