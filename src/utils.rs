/// The bytes C's `isspace` considers whitespace. Unlike `u8::is_ascii_whitespace`, this includes
/// the vertical tab.
macro_rules! whitespace_pat {
    () => {
        b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r'
    };
}

pub(crate) use whitespace_pat;

pub(crate) enum ControlToken {
    Eof,
    Continue,
}

// having this be a macro is performance critical. rustc appears to be unable to optimize away code
// like this:
//
// ```rust
// fn noop(s: &str) {}
//
// noop(&format!("foo"));
// ```
//
// format!() + its string allocation still exists in resulting code
macro_rules! trace_log {
    ($($tt:tt)*) => {{
        #[cfg(debug_assertions)]
        crate::testutils::trace_log(&format!($($tt)*));
    }};
}

pub(crate) use trace_log;
