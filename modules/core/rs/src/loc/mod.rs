pub use interval::{Interval, IntervalOp};
pub use orientation::Orientation;

mod interval;
mod orientation;
