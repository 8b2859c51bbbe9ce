//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one catalog page.
    FetchList { limit: u32, offset: u32 },
    /// Fetch the detail record for one id.
    FetchDetail { id: String },
}
