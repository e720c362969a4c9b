#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]

pub mod errors;
pub mod keys;
pub mod schemes;
pub mod schnorr;
pub mod utils;
