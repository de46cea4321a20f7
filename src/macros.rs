/// Define a lazily-compiled static [`regex::Regex`] in place.
///
/// Every pattern in this crate is a fixed literal compiled exactly once; a
/// pattern that fails to compile is a programming error, so the `unwrap` never
/// fires at runtime for shipped patterns.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
