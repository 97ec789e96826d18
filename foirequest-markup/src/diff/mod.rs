//! Sequence alignment and difference marking.
//!
//! - **`matcher`**: Ratcliff/Obershelp alignment producing opcodes
//! - **`marker`**: renders one text with the regions that differ from another wrapped in spans

mod marker;
mod matcher;

pub use marker::{
    mark_differences, mark_differences_with_stats, MarkStats, MarkedText, MarkerConfig,
    DEFAULT_ATTRS, DEFAULT_END_TAG, DEFAULT_MIN_PART_LEN, DEFAULT_START_TAG,
};
pub use matcher::{Match, OpTag, Opcode, SequenceMatcher};
