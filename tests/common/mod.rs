#![allow(dead_code)]

pub mod fixtures;
pub mod logger;
pub mod macros;
