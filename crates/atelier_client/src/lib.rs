//! Gateway client and incremental renderer for Atelier.
//!
//! [`GatewayClient`] turns the four gateway routes into [`GatewayReply`]s;
//! [`render::Exchange`] shows a waiting indicator while a request runs and
//! then reveals the reply on a [`Surface`] without ever exposing half a tag.

mod client;
pub mod render;
mod reply;
mod surface;

pub use client::GatewayClient;
pub use render::{Exchange, RenderOptions, RenderState};
pub use reply::GatewayReply;
pub use surface::{Frame, RecordingSurface, Surface};
