use log::warn;
use serde::Serialize;

pub const EMPTY_LIST: &str = "empty list";
pub const SEPARATOR: &str = " --> ";

// placeholder for values json can't represent
const UNDEFINED: &str = "undefined";

/// Compact json text of a stored value.
pub fn render_value<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        warn!("can't render list value: {}", e);
        UNDEFINED.to_owned()
    })
}

pub fn render_list<'a, T, I>(size: usize, values: I) -> String
where
    T: Serialize + 'a,
    I: Iterator<Item = &'a T>,
{
    if size == 0 {
        return EMPTY_LIST.to_owned();
    }
    let content = values.map(render_value).collect::<Vec<_>>();
    format!("({} elements): {}", size, content.join(SEPARATOR))
}
