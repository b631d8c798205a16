//! Field access for clause evaluation.

use crate::value::Value;

/// Records whose fields can be addressed by name in a [`Query`](crate::Query).
///
/// [`Monster`](crate::Monster) implements this for every stat, code and
/// derived metric. Other record types implement it by hand:
///
/// ```
/// use mondb::{Queryable, Value, Number};
///
/// struct Item {
///     name: String,
///     weight: i32,
/// }
///
/// impl Queryable for Item {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "weight" => Value::Number(Number::from(self.weight)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Queryable {
    /// Returns the value of a field, or [`Value::None`] if the field doesn't
    /// exist or has no value for this record.
    fn field_value(&self, field: &str) -> Value<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    struct TestItem {
        name: String,
        count: i32,
    }

    impl Queryable for TestItem {
        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::String(&self.name),
                "count" => Value::Number(Number::from(self.count)),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn queryable_manual_impl() {
        let item = TestItem {
            name: "test".to_string(),
            count: 42,
        };

        assert_eq!(item.field_value("name"), Value::String("test"));
        assert_eq!(item.field_value("count"), Value::Number(Number::Int(42)));
        assert_eq!(item.field_value("unknown"), Value::None);
    }
}
