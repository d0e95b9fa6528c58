//! Backup Resolver
//!
//! Correlates snapmirror relationships with their cloud destination: the
//! first relationship whose destination path carries the reserved backup
//! prefix names the authoritative container, and every relationship
//! destined for that container yields one entry keyed by the destination
//! UUID observed in its detail record.

use crate::api::{ArrayMetadata, RelationshipSummary};
use crate::error::Result;
use crate::resolve::{split_server_volume, ResolvedEntry};
use tracing::{debug, warn};

/// Reserved prefix marking a backup destination container
pub const BACKUP_CONTAINER_PREFIX: &str = "netapp-backup";

/// Pure scan for the authoritative container: the container segment of the
/// first destination path carrying the reserved prefix, in API order.
pub fn find_backup_container(records: &[RelationshipSummary]) -> Option<String> {
    records
        .iter()
        .find(|r| r.destination.path.starts_with(BACKUP_CONTAINER_PREFIX))
        .map(|r| {
            r.destination
                .path
                .split(':')
                .next()
                .unwrap_or(&r.destination.path)
                .to_string()
        })
}

/// Resolve all backup-protected volumes on the cluster. No relationship
/// carrying the backup prefix means an empty report, which is valid.
pub async fn resolve(api: &dyn ArrayMetadata) -> Result<Vec<ResolvedEntry>> {
    let records = api.fetch_relationships().await?;

    let Some(container) = find_backup_container(&records) else {
        debug!("no destination path carries the backup prefix; nothing to size");
        return Ok(Vec::new());
    };
    debug!(%container, relationships = records.len(), "resolved backup container");

    let mut entries = Vec::new();
    for record in records
        .iter()
        .filter(|r| r.destination.path.starts_with(&container))
    {
        let detail = api.fetch_relationship_detail(&record.uuid).await?;

        // List and detail endpoints can drift; trust only a matching detail.
        if detail.uuid != record.uuid {
            warn!(
                listed = %record.uuid,
                detail = %detail.uuid,
                "relationship detail does not match listing, skipping"
            );
            continue;
        }

        let (server, volume) = match split_server_volume(&detail.source.path) {
            Ok(parts) => parts,
            Err(err) => {
                warn!(relationship = %record.uuid, %err, "skipping relationship");
                continue;
            }
        };

        entries.push(ResolvedEntry {
            volume_name: volume.to_string(),
            cloud_object_id: detail.destination.uuid,
            server_name: server.to_string(),
            container_name: container.clone(),
        });
    }

    Ok(entries)
}
