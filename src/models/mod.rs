pub mod consolidated;
pub mod diagnostic;
pub mod identity;
pub mod raw_context;
pub mod time_spent;

pub use consolidated::ConsolidatedContext;
pub use diagnostic::{Diagnostic, TimestampField};
pub use identity::LogicalIdentity;
pub use raw_context::RawContext;
pub use time_spent::{TimeSpent, TimeUnit, UnitMismatch};
