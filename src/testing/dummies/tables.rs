use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use crate::core::table::Table;

/// The classic 14-day "play tennis" relation, class attribute last.
pub const WEATHER_ROWS: [[&str; 5]; 14] = [
    ["sunny", "hot", "high", "FALSE", "no"],
    ["sunny", "hot", "high", "TRUE", "no"],
    ["overcast", "hot", "high", "FALSE", "yes"],
    ["rainy", "mild", "high", "FALSE", "yes"],
    ["rainy", "cool", "normal", "FALSE", "yes"],
    ["rainy", "cool", "normal", "TRUE", "no"],
    ["overcast", "cool", "normal", "TRUE", "yes"],
    ["sunny", "mild", "high", "FALSE", "no"],
    ["sunny", "cool", "normal", "FALSE", "yes"],
    ["rainy", "mild", "normal", "FALSE", "yes"],
    ["sunny", "mild", "normal", "TRUE", "yes"],
    ["overcast", "mild", "high", "TRUE", "yes"],
    ["overcast", "hot", "normal", "FALSE", "yes"],
    ["rainy", "mild", "high", "TRUE", "no"],
];

pub fn weather_header() -> InstanceHeader {
    let attribute = |name: &str, values: &[&str]| {
        NominalAttribute::shared(name, values.iter().copied())
            .expect("fixture attributes are well formed")
    };
    InstanceHeader::new(
        "weather.symbolic".into(),
        vec![
            attribute("outlook", &["sunny", "overcast", "rainy"]),
            attribute("temperature", &["hot", "mild", "cool"]),
            attribute("humidity", &["high", "normal"]),
            attribute("windy", &["TRUE", "FALSE"]),
            attribute("play", &["yes", "no"]),
        ],
    )
    .expect("fixture attribute names are unique")
}

pub fn weather_table() -> Table {
    let mut table = Table::with_header(weather_header());
    for row in WEATHER_ROWS {
        table
            .add_row(&row)
            .expect("fixture rows match the fixture header");
    }
    table
}
