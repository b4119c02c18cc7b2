use serde_json::Value;

/// Maximum number of timeline rows to return. Anything that does not coerce
/// to a positive integer means "no limit".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limit(Option<usize>);

impl Limit {
    pub const UNLIMITED: Limit = Limit(None);

    pub fn new(n: i64) -> Self {
        if n > 0 {
            Limit(usize::try_from(n).ok())
        } else {
            Limit::UNLIMITED
        }
    }

    /// Lenient coercion of a template argument.
    ///
    /// Integers are taken as-is, floats are truncated toward zero, numeric
    /// strings are parsed, booleans count as 1 or 0.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Limit::new(i)
                } else if let Some(u) = n.as_u64() {
                    Limit(usize::try_from(u).ok())
                } else {
                    n.as_f64()
                        .filter(|f| f.is_finite())
                        .map(|f| Limit::new(f.trunc() as i64))
                        .unwrap_or_default()
                }
            }
            Value::String(s) => Limit::parse(s),
            Value::Bool(true) => Limit::new(1),
            _ => Limit::UNLIMITED,
        }
    }

    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map(Limit::new)
            .unwrap_or_default()
    }

    pub fn get(self) -> Option<usize> {
        self.0
    }

    pub fn apply<T>(self, items: &mut Vec<T>) {
        if let Some(max) = self.0 {
            items.truncate(max);
        }
    }
}

impl From<Option<i64>> for Limit {
    fn from(value: Option<i64>) -> Self {
        value.map(Limit::new).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn positive_values_limit() {
        assert_eq!(Limit::from_json(&json!(2)).get(), Some(2));
        assert_eq!(Limit::from_json(&json!("3")).get(), Some(3));
        assert_eq!(Limit::from_json(&json!(" 4 ")).get(), Some(4));
        assert_eq!(Limit::from_json(&json!(2.9)).get(), Some(2));
    }

    #[test]
    fn everything_else_is_unlimited() {
        for value in [json!(0), json!(-3), json!("soon"), json!(null), json!([1]), json!("2.5")] {
            assert_eq!(Limit::from_json(&value), Limit::UNLIMITED, "{value}");
        }
    }

    #[test]
    fn apply_truncates_only_when_limited() {
        let mut items = vec![1, 2, 3];
        Limit::UNLIMITED.apply(&mut items);
        assert_eq!(items.len(), 3);
        Limit::new(2).apply(&mut items);
        assert_eq!(items, vec![1, 2]);
    }
}
