use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::error::Result;

/// Pull-based source of `Instance`s, used to populate a
/// [`Table`](crate::core::table::Table).
///
/// All returned instances must conform to the same, immutable
/// [`InstanceHeader`] for the lifetime of the stream.
pub trait Stream {
    /// Returns the stream header (relation name and attributes).
    ///
    /// Every instance yielded by [`next_instance`](Stream::next_instance)
    /// binds its values to exactly these attributes, in this order.
    fn header(&self) -> &InstanceHeader;

    /// Indicates whether the stream *may* produce more instances.
    ///
    /// This call should be cheap and side effect free. If it returns `false`,
    /// a subsequent call to [`next_instance`](Stream::next_instance) must
    /// return `Ok(None)`.
    fn has_more_instances(&self) -> bool;

    /// Produces the next instance, or `Ok(None)` once the stream is exhausted.
    ///
    /// Malformed records are reported as errors rather than skipped; the
    /// stream stays positioned after the offending record.
    fn next_instance(&mut self) -> Result<Option<Instance>>;

    /// Resets the stream to its first instance. The header is unchanged.
    ///
    /// Returns an error if the underlying source cannot be reopened.
    fn restart(&mut self) -> Result<()>;
}
