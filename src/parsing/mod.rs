//! The transcript parsing pipeline, stage by stage.
//!
//! ```text
//! lines ─► classifier ─► assembler ─► timestamp ─► notice ─► Record
//! ```
//!
//! Each stage is usable on its own; [`parse_transcript`](crate::parse_transcript)
//! composes them in order.

pub mod assembler;
pub mod classifier;
pub mod notice;
pub mod timestamp;

pub use assembler::{Assembler, assemble};
pub use classifier::{HEADER_PATTERN, classify, is_header};
pub use notice::{NoticeFilter, clean, is_system_notice, strip_direction_mark};
pub use timestamp::{ClockFormat, normalize, parse_date, parse_timestamp};
