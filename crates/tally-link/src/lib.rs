// Settlement handoff codec.
//
// A settlement request travels between the web page and the app as
// two query parameters, `amount` and `sender`. Both sides treat the
// payload as idempotent display data: malformed or missing values
// fall back to defaults and are never surfaced as errors.

mod codec;
pub use codec::*;

mod format;
pub use format::*;
