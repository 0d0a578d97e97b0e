//! API middleware.

mod session;

pub use session::{auth_middleware, require_staff, session_id, CurrentUser, StaffUser};
