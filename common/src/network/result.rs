//! Probe outcome types.

use serde::Serialize;

/// Resolved address literals, in resolver order.
///
/// When a resolver yields both families the IPv6 literal comes first.
/// An empty list never leaves a resolver: "nothing resolved" is `None`.
pub type AddressList = Vec<String>;

/// Snapshot of one probe. Derived on demand, never cached.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub resolvable: bool,
    pub reachable: bool,
    pub addresses: Option<AddressList>,
}

impl ProbeResult {
    /// Builds a result whose `resolvable` flag follows from `addresses`.
    pub fn new(addresses: Option<AddressList>, reachable: bool) -> Self {
        let addresses = addresses.filter(|list| !list.is_empty());
        Self {
            resolvable: addresses.is_some(),
            reachable,
            addresses,
        }
    }

    /// Outcome for a platform without a provider.
    pub fn unavailable() -> Self {
        Self::default()
    }
}
