pub mod endpoint;
pub mod names;

pub use endpoint::{AUTH_PASSWORD, AUTH_USERNAME, EndpointAuthorization};
pub use names::{inputs, udclient, variables};
