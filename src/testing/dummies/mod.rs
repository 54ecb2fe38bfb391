mod tables;

pub use tables::{WEATHER_ROWS, weather_header, weather_table};
