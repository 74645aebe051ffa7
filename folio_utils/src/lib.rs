mod macros;

/// Version string reported by the CLI and the outbound HTTP user agent.
pub fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use folio_utils::Apply;
    /// fn add_option(a: i32, b: Option<i32>) -> i32 {
    ///     a.apply_map(b, |slf, arg| slf + arg)
    /// }
    /// assert_eq!(add_option(1, None), 1);
    /// assert_eq!(add_option(1, Some(2)), 3);
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }

    /// Passes `self` through the function `f`, so builder-style chains can
    /// include free functions.
    fn pipe<T>(self, f: impl FnOnce(Self) -> T) -> T
    where
        Self: Sized,
    {
        f(self)
    }
}

impl<T> Apply for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_map_skips_none() {
        assert_eq!(String::from("a").apply_map(None, |s, x: &str| s + x), "a");
        assert_eq!(String::from("a").apply_map(Some("b"), |s, x| s + x), "ab");
    }

    #[test]
    fn pipe_applies_function() {
        assert_eq!(21.pipe(|x| x * 2), 42);
    }
}
