//! Capability contract implemented by Spoofax runtimes.
//!
//! The bootstrap only knows this trait. Which runtime sits behind it is chosen
//! by the composition root, so tests can substitute a stub.
use anyhow::Result;
use spoofax_log::Logger;

/// Entry point of a Spoofax runtime.
///
/// # Implementations
///
/// - `SpoofaxRuntime` (`spoofax-runtime` crate): the default runtime
/// - Test stubs that record invocations
///
/// # Example Implementation
///
/// ```
/// use anyhow::Result;
/// use spoofax_api::SpoofaxApi;
/// use spoofax_log::{Logger, NoopLogger};
///
/// struct Hello;
///
/// impl SpoofaxApi for Hello {
///     fn perform(&self, logger: &dyn Logger) -> Result<()> {
///         logger.info("hello");
///         Ok(())
///     }
/// }
///
/// Hello.perform(&NoopLogger::new("root")).unwrap();
/// ```
pub trait SpoofaxApi {
    /// Perform the runtime's work, reporting through `logger`.
    ///
    /// Runs synchronously on the calling thread.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the runtime encounters; callers propagate it
    /// untouched.
    fn perform(&self, logger: &dyn Logger) -> Result<()>;
}

impl<T: SpoofaxApi + ?Sized> SpoofaxApi for Box<T> {
    fn perform(&self, logger: &dyn Logger) -> Result<()> {
        (**self).perform(logger)
    }
}

impl<T: SpoofaxApi + ?Sized> SpoofaxApi for &T {
    fn perform(&self, logger: &dyn Logger) -> Result<()> {
        (**self).perform(logger)
    }
}
