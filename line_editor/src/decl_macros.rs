// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic
/// sugar that helps having to write `Ok(())`.
///
/// ```
/// use r3bl_line_editor::ok;
///
/// fn flush_nothing() -> std::io::Result<()> { ok!() }
/// fn width() -> std::io::Result<usize> { ok!(4) }
///
/// assert!(flush_nothing().is_ok());
/// assert_eq!(width().unwrap(), 4);
/// ```
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}

/// Wrapper for [`pretty_assertions::assert_eq!`] so that test failures show a colored
/// diff. Only available to code that depends on `pretty_assertions` (the tests in this
/// crate do, as a dev dependency).
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
