//! Singly-linked input list
//!
//! The list is owned by the caller and only ever borrowed by the converter.

mod node;
mod parse;

pub use node::{from_values, iter, len, Iter, ListNode};
pub use parse::{parse_values, ParseError};
