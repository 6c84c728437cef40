/*
[INPUT]:  API revision markers
[OUTPUT]: Compile-time capability sets for DiscoinClient
[POS]:    HTTP layer - revision tags
[UPDATE]: When a new API revision is supported
*/

use std::fmt::Debug;

use crate::types::ApiVersion;

/// Marker for one revision of the Discoin API
///
/// Each revision gets its own `impl DiscoinClient<R>` block, so an
/// operation only exists on the revisions that support it.
pub trait Revision: Debug + Clone + Send + Sync + 'static {
    const VERSION: ApiVersion;
}

/// Legacy revision: receipts, reversals, raw token header
#[derive(Debug, Clone, Copy, Default)]
pub struct V2;

/// Current revision: nested currencies, handled flag, bearer token
#[derive(Debug, Clone, Copy, Default)]
pub struct V3;

impl Revision for V2 {
    const VERSION: ApiVersion = ApiVersion::V2;
}

impl Revision for V3 {
    const VERSION: ApiVersion = ApiVersion::V3;
}
