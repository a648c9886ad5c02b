/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made at the interesting points of a solve: when
the vertex order is fixed, when the incumbent improves, when nogoods are
posted, and when a restart happens.
The hot paths (colouring, the branching loop) are silent.

Note, no log implementation is provided.
For details, see [log].
*/

/// Targets to be used within a [log] macro.
pub mod targets {
    pub const EXPAND: &str = "expand";
    pub const INCUMBENT: &str = "incumbent";
    pub const NOGOODS: &str = "nogoods";
    pub const ORDERING: &str = "ordering";
    pub const RESTARTS: &str = "restarts";
}
