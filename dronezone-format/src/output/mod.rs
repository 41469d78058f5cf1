//! Contains writers of routing results.

mod dot;
pub use self::dot::*;

mod info;
pub use self::info::*;

mod report;
pub use self::report::*;
