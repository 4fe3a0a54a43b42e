pub mod drivers;
pub mod platform;
