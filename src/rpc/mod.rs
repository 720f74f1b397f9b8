mod error;
mod handlers;
mod router;
mod types;

pub use error::RpcError;
pub use handlers::permissions::user_permissions;
pub use router::handle_request;
pub use types::AppState;
