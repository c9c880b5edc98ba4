pub mod anonymize;

pub use anonymize::{rewrite, RESERVED};

#[cfg(test)]
mod test;
