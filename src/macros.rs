/// Builds an [`HronValue`](crate::HronValue) from a JSON-like literal.
///
/// Object keys are string literals; values may be literals, nested
/// arrays or objects, or any expression implementing `Serialize`.
///
/// ```rust
/// use hron::hron;
///
/// let value = hron!({
///     "name": "Alice",
///     "scores": [90, 85],
///     "active": true
/// });
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! hron {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::hron!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::HronMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::HronMap::new();
        $(
            object.insert($key.to_string(), $crate::hron!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any serializable expression.
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}
