pub use map::{IntoIter, OrderedMap};

mod map;
