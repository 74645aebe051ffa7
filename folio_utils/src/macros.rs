/// Asserts that a value matches a pattern (with an optional `if` guard). The
/// pattern is matched against a reference, so bindings borrow from the value.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $($pattern:tt)+) => {{
        let value = $expr;
        ::core::assert!(
            ::core::matches!(&value, $($pattern)+),
            "{value:?} does not match `{}`",
            ::core::stringify!($($pattern)+),
        );
    }};
}
