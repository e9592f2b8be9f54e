mod mmp;

pub use mmp::*;
