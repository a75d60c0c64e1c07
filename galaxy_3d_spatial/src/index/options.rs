//! Which diagnostic node lists a query records.

bitflags::bitflags! {
    /// Diagnostic lists a query should fill.
    ///
    /// With no flag set the result carries no diagnostics at all and nothing
    /// is allocated for them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct QueryOptions: u8 {
        /// Every node whose box was tested
        const TESTED_NODES      = 0b0000_0001;
        /// Every node whose box passed the test
        const INTERSECTED_NODES = 0b0000_0010;
        /// Every leaf whose primitives were tested
        const LEAF_NODES        = 0b0000_0100;
        /// All three lists
        const DIAGNOSTICS = Self::TESTED_NODES.bits()
            | Self::INTERSECTED_NODES.bits()
            | Self::LEAF_NODES.bits();
    }
}

impl QueryOptions {
    /// Options matching a builder's `extra_info` flag.
    pub fn from_extra_info(extra_info: bool) -> Self {
        if extra_info {
            Self::DIAGNOSTICS
        } else {
            Self::empty()
        }
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::empty()
    }
}
