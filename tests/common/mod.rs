#![allow(dead_code)]

pub mod list;

pub use list::{BidiList, ForwardList};
