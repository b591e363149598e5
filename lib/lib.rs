/// Fixed width bit registers.
pub mod register;
/// Assorted utilities.
pub mod util;
