// Log shims: with the `tracing` feature off, the events and their field expressions are
// compiled out. The target defaults to the calling module path.

macro_rules! vlog {
    ($level:ident, $($tt:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($tt)*);
    };
}

macro_rules! vtrace {
    ($($tt:tt)*) => { vlog!(trace, $($tt)*) };
}

macro_rules! vdebug {
    ($($tt:tt)*) => { vlog!(debug, $($tt)*) };
}

macro_rules! vwarn {
    ($($tt:tt)*) => { vlog!(warn, $($tt)*) };
}
