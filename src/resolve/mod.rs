//! Resolvers: array identifiers to cloud locations
//!
//! Each resolver turns array-side metadata into (volume, container, object
//! prefix) triples for one service. The sizing stage consumes the entries in
//! emission order.

pub mod backup;
pub mod tiering;

use crate::error::{Error, Result};

/// One correlated volume, ready for sizing. The cloud object id always
/// originates from a destination or buftree identifier observed in the
/// metadata responses, never synthesized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub volume_name: String,
    pub cloud_object_id: String,
    pub server_name: String,
    pub container_name: String,
}

/// Split a colon-delimited `server:volume` path. The upstream API guarantees
/// the shape; anything else is a malformed path, not a panic.
pub(crate) fn split_server_volume(path: &str) -> Result<(&str, &str)> {
    let mut segments = path.split(':');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(server), Some(volume), None) if !server.is_empty() && !volume.is_empty() => {
            Ok((server, volume))
        }
        _ => Err(Error::MalformedPath {
            path: path.to_string(),
        }),
    }
}
