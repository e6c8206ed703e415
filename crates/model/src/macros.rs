/// Builds the trailing argument list of a fetch: an optional raw clause
/// followed by positional parameter values.
///
/// ```
/// use model::{args, core::value::Value};
///
/// let args = args!["WHERE age = $1", 10i64];
/// assert_eq!(args, vec![Value::from("WHERE age = $1"), Value::Int(10)]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::core::value::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::core::value::Value::from($arg)),+]
    };
}
