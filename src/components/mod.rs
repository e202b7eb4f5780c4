mod icon;
pub use icon::*;

mod touchable;
pub use touchable::*;
