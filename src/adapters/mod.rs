// Adapters layer: concrete implementations at the edges (outbound directory client, inbound HTTP).

pub mod http;
pub mod web;
