// Emits a trace event when the `tracing` feature is enabled.
macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "tracing")] {
            tracing::trace!($($tt)*)
        }
    }
}

pub(crate) use trace;
