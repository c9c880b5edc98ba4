pub mod topology;

pub use topology::{Node, Topology};

#[cfg(test)]
mod test;
