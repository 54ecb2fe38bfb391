pub mod dummies;
pub mod stubs;

pub use dummies::{WEATHER_ROWS, weather_header, weather_table};
pub use stubs::VecStream;
