// Internal types never exposed over the wire
pub mod auth;
