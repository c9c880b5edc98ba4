pub mod codec;
pub mod record;

pub use codec::{parse, serialize};
pub use record::{Direction, Record, TIME_FORMAT};
