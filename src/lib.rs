pub mod anonymize;
pub mod digest;
pub mod error;
pub mod generate;
pub mod record;
pub mod synth;
pub mod topology;
