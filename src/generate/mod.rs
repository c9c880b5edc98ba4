pub mod generate;
pub mod sink;

pub use generate::Generator;
pub use sink::Sinks;
