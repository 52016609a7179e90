//! loginapp-axum - Axum integration for the loginapp session gateway
//!
//! Mounts the session endpoints on `/` and a liveness probe on `/health`:
//!
//! | Method | Path      | Effect                                            |
//! |--------|-----------|---------------------------------------------------|
//! | GET    | `/`       | login form, or session controls when logged in    |
//! | POST   | `/`       | log in through the provider named by `base`       |
//! | PATCH  | `/`       | verify the session                                |
//! | PUT    | `/`       | refresh the session expiry                        |
//! | DELETE | `/`       | log out                                           |
//! | GET    | `/health` | `ok`                                              |

mod dispatcher;
mod error;
mod health;
mod pages;
mod router;
mod session;

pub use dispatcher::SessionDispatcher;
pub use error::IntoResponseError;
pub use router::{loginapp_router, loginapp_router_no_trace};
pub use session::{AuthRejection, AuthSubject};

// Re-export the core crate's entry points so applications need a single dependency
pub use loginapp::{ProviderKind, Providers, SESSION_COOKIE_NAME, Subject};
