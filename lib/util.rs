mod adder;
mod integer;
mod register;

pub use adder::*;
pub use integer::*;
pub use register::*;
