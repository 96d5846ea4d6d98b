//! Generic view/edit/delete/custom-action dispatch for entity rows.
//!
//! [`CrudOperations`] knows nothing about HTTP or terminals: navigation and
//! deletion go through a [`CrudBackend`], confirmations through a [`Prompt`]
//! and user feedback through a [`ToastSink`](crate::toast::ToastSink).
//! [`HttpBackend`] is the stock backend, resolving Laravel-style resource
//! route names (`citizens.show`, `citizens.destroy`) with a [`RouteTable`].

mod backend;
mod http;
mod operations;
mod options;
mod routes;

pub use backend::*;
pub use http::*;
pub use operations::*;
pub use options::*;
pub use routes::*;
