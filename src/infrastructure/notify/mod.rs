pub mod email;
pub mod noop;
