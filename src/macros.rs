// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate anything string-like into one owned `String`.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {
        [$(::std::convert::AsRef::<str>::as_ref(&$part)),+].concat()
    };
}
