//! `hasitem` sub-grammar: `{k=v,...}` or `[{k=v,...},{k=v,...}]`.

use smol_str::SmolStr;

use super::params::ParamMap;
use super::scan::{split_pair, split_top_level, strip_delims};

/// Object keys the hasitem editor knows about. Others are kept verbatim.
pub const HASITEM_KEYS: [&str; 5] = ["item", "data", "quantity", "location", "slot"];

/// One inventory requirement inside a `hasitem` value.
///
/// Values are opaque strings: `quantity` and `slot` may hold ranges (`1..`)
/// or negations (`!0`), and no numeric validation happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HasitemCondition {
    fields: ParamMap,
}

impl HasitemCondition {
    pub fn new(item: impl Into<String>) -> Self {
        let mut fields = ParamMap::new();
        fields.insert("item", item);
        Self { fields }
    }

    /// Builder-style field setter. Blank values remove the field.
    pub fn with(mut self, key: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<SmolStr>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.fields.remove(&key);
        } else {
            self.fields.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key)
    }

    pub fn item(&self) -> Option<&str> {
        self.get("item")
    }

    pub fn data(&self) -> Option<&str> {
        self.get("data")
    }

    pub fn quantity(&self) -> Option<&str> {
        self.get("quantity")
    }

    pub fn location(&self) -> Option<&str> {
        self.get("location")
    }

    pub fn slot(&self) -> Option<&str> {
        self.get("slot")
    }

    pub fn fields(&self) -> &ParamMap {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn parse_object(body: &str) -> Self {
        let mut fields = ParamMap::new();
        for segment in split_top_level(body) {
            let (key, value) = split_pair(segment);
            if !key.is_empty() {
                fields.insert(key, value);
            }
        }
        Self { fields }
    }

    fn build_object(&self) -> String {
        format!("{{{}}}", self.fields.join_pairs())
    }
}

/// Parse a `hasitem` value into its conditions.
///
/// Accepts a single object, an array of objects, or a bare `k=v,...` list.
/// Empty objects are dropped.
pub fn parse_hasitem(input: &str) -> Vec<HasitemCondition> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }

    let conditions: Vec<HasitemCondition> = if input.starts_with('[') {
        split_top_level(strip_delims(input, '[', ']'))
            .into_iter()
            .map(|segment| HasitemCondition::parse_object(strip_delims(segment.trim(), '{', '}')))
            .collect()
    } else {
        vec![HasitemCondition::parse_object(strip_delims(input, '{', '}'))]
    };

    conditions.into_iter().filter(|c| !c.is_empty()).collect()
}

/// Build a `hasitem` value.
///
/// No conditions yield an empty string, one yields a bare object, several
/// are wrapped in an array.
pub fn build_hasitem(conditions: &[HasitemCondition]) -> String {
    let objects: Vec<String> = conditions
        .iter()
        .filter(|c| !c.is_empty())
        .map(HasitemCondition::build_object)
        .collect();
    match objects.len() {
        0 => String::new(),
        1 => objects.into_iter().next().unwrap_or_default(),
        _ => format!("[{}]", objects.join(",")),
    }
}

/// Whitespace-normalized form of a raw `hasitem` value, keeping its shape.
///
/// An array stays an array even with a single element. Unparseable input is
/// returned unchanged.
pub fn format_hasitem_display(raw: &str) -> String {
    let conditions = parse_hasitem(raw);
    if conditions.is_empty() {
        return raw.to_string();
    }
    if raw.trim_start().starts_with('[') {
        let objects: Vec<String> = conditions.iter().map(HasitemCondition::build_object).collect();
        format!("[{}]", objects.join(","))
    } else {
        build_hasitem(&conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_object() {
        let conds = parse_hasitem("{item=apple,quantity=1..,location=slot.hotbar,slot=0}");
        assert_eq!(conds.len(), 1);
        let c = &conds[0];
        assert_eq!(c.item(), Some("apple"));
        assert_eq!(c.quantity(), Some("1.."));
        assert_eq!(c.location(), Some("slot.hotbar"));
        assert_eq!(c.slot(), Some("0"));
        assert_eq!(c.data(), None);
    }

    #[test]
    fn test_parse_array() {
        let conds = parse_hasitem("[{item=apple,quantity=1..},{item=stick,quantity=2}]");
        assert_eq!(conds.len(), 2);
        assert_eq!(conds[0].item(), Some("apple"));
        assert_eq!(conds[1].quantity(), Some("2"));
    }

    #[test]
    fn test_parse_bare_pairs() {
        let conds = parse_hasitem("item=diamond, data=0");
        assert_eq!(conds.len(), 1);
        assert_eq!(conds[0].item(), Some("diamond"));
        assert_eq!(conds[0].data(), Some("0"));
    }

    #[test]
    fn test_parse_empty_inputs() {
        assert!(parse_hasitem("").is_empty());
        assert!(parse_hasitem("  ").is_empty());
        assert!(parse_hasitem("{}").is_empty());
        assert!(parse_hasitem("[]").is_empty());
    }

    #[test]
    fn test_parse_tolerates_empty_values() {
        let conds = parse_hasitem("{item=apple,data=}");
        assert_eq!(conds[0].data(), Some(""));
    }

    #[test]
    fn test_build_shapes() {
        assert_eq!(build_hasitem(&[]), "");

        let apple = HasitemCondition::new("apple").with("quantity", "1..");
        assert_eq!(build_hasitem(std::slice::from_ref(&apple)), "{item=apple,quantity=1..}");

        let stick = HasitemCondition::new("stick").with("location", "slot.weapon.mainhand");
        assert_eq!(
            build_hasitem(&[apple, stick]),
            "[{item=apple,quantity=1..},{item=stick,location=slot.weapon.mainhand}]"
        );
    }

    #[test]
    fn test_set_blank_removes() {
        let mut c = HasitemCondition::new("apple").with("data", "3");
        c.set("data", " ");
        assert_eq!(c.data(), None);
    }

    #[test]
    fn test_round_trip_preserves_unknown_keys() {
        let raw = "[{item=apple,custom=yes},{item=stick}]";
        assert_eq!(build_hasitem(&parse_hasitem(raw)), raw);
    }

    #[test]
    fn test_display_keeps_array_shape() {
        assert_eq!(format_hasitem_display("[{ item=apple }]"), "[{item=apple}]");
        assert_eq!(format_hasitem_display("{ item=apple }"), "{item=apple}");
        assert_eq!(format_hasitem_display("[]"), "[]");
    }
}
