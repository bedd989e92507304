// Log shims. `plog!` takes a `tracing` level macro name; without the `tracing` feature every
// call expands to nothing and its arguments are never evaluated.

#[cfg(feature = "tracing")]
macro_rules! plog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "peek_carousel", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! plog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! ptrace {
    ($($tt:tt)*) => { plog!(trace, $($tt)*) };
}

macro_rules! pdebug {
    ($($tt:tt)*) => { plog!(debug, $($tt)*) };
}

macro_rules! pwarn {
    ($($tt:tt)*) => { plog!(warn, $($tt)*) };
}
