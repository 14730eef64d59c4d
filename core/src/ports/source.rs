//! Port query source port (interface).

use std::future::Future;

/// Port for gathering raw listing text from the operating system.
///
/// Every method returns the tool's output verbatim. Failures are not
/// errors here: an implementation that cannot get data returns empty text
/// (or `None` for the process tree), and the caller reports "no data".
pub trait PortQuerySource: Send + Sync {
    /// Open sockets on `port`, header line included.
    fn query_port(&self, port: u16) -> impl Future<Output = String> + Send;

    /// Network connections held by `pid`, header line included.
    fn query_process_connections(&self, pid: u32) -> impl Future<Output = String> + Send;

    /// PID / parent PID / command for `pid`, or `None` if it is gone.
    fn query_process_tree(&self, pid: u32) -> impl Future<Output = Option<String>> + Send;

    /// Every listening TCP socket on the system.
    fn query_all_listening(&self) -> impl Future<Output = String> + Send;
}
