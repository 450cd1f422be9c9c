//! Machine configuration.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Per-machine settings.
///
/// The defaults reproduce the plain engine: chains are unbounded and no
/// history is kept. Hosts can embed this in their own configuration files.
///
/// ```rust
/// use statechain::machine::MachineConfig;
///
/// let config: MachineConfig = serde_json::from_str(r#"{ "max_hops": 32 }"#).unwrap();
/// assert_eq!(config.max_hops.map(|n| n.get()), Some(32));
/// assert!(!config.record_history);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Upper bound on hops per submission.
    ///
    /// `None` leaves chains unbounded: a table whose actions cycle without
    /// ever returning the no-op event makes the submission loop forever.
    pub max_hops: Option<NonZeroUsize>,

    /// Record every hop in the machine's history.
    pub record_history: bool,

    /// Oldest hops are dropped beyond this many. `None` keeps everything.
    pub history_capacity: Option<usize>,
}
