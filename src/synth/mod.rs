pub mod ports;
pub mod synth;

pub use ports::PortCounter;
pub use synth::{random_ip, Synth};
