pub mod diff;
pub mod formatter;
pub mod rounder;
pub mod scanner;
pub mod session;

pub use crate::domain::model::{DiffReport, SnapshotOutcome, Span, SpanKind};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
