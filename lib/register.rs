mod address;
mod arithmetic;
mod bit_register;
mod invert;
mod parse;

pub use address::*;
pub use bit_register::*;
pub use parse::*;
