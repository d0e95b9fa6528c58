//! Tiering Resolver
//!
//! Longer join chain than backup: the StorageAccount tiering target names
//! the container and cluster, the cluster scopes the volume list, and the
//! object-store mappings carry the buftree UUID each tiered volume lives
//! under in the container.

use crate::api::ArrayMetadata;
use crate::error::{Error, Result};
use crate::resolve::ResolvedEntry;
use tracing::debug;

/// Name of the tiering target this resolver reports on
pub const STORAGE_ACCOUNT_TARGET: &str = "StorageAccount";

/// Prefix of SVM-owned server names; also marks internal system volumes
pub const SVM_PREFIX: &str = "svm_";

/// Resolve all tiered volumes on the cluster. A missing StorageAccount
/// target is terminal: tiering size cannot be computed without it.
pub async fn resolve(api: &dyn ArrayMetadata) -> Result<Vec<ResolvedEntry>> {
    let targets = api.fetch_tiering_targets().await?;
    let summary = targets
        .iter()
        .find(|t| t.name == STORAGE_ACCOUNT_TARGET)
        .ok_or(Error::NoTieringTarget)?;

    let target = api.fetch_tiering_target_detail(&summary.uuid).await?;
    debug!(
        container = %target.container,
        cluster = %target.cluster.name,
        "resolved tiering target"
    );

    // Volumes owned by the cluster's SVM, minus internal system volumes.
    let server = format!("{}{}", SVM_PREFIX, target.cluster.name);
    let volumes: Vec<_> = api
        .fetch_volumes()
        .await?
        .into_iter()
        .filter(|v| v.server == server && !v.name.starts_with(SVM_PREFIX))
        .collect();

    let mappings: Vec<_> = api
        .fetch_object_store_mappings()
        .await?
        .into_iter()
        .filter(|m| m.object_store_name == summary.name)
        .collect();

    debug!(volumes = volumes.len(), mappings = mappings.len(), "joining");

    // Small cardinality, nested loop is fine. A volume matching several
    // mappings emits one entry per match; upstream state owns consistency.
    let mut entries = Vec::new();
    for volume in &volumes {
        for mapping in mappings.iter().filter(|m| m.volume_uuid == volume.uuid) {
            entries.push(ResolvedEntry {
                volume_name: volume.name.clone(),
                cloud_object_id: mapping.buftree_uuid.clone(),
                server_name: volume.server.clone(),
                container_name: target.container.clone(),
            });
        }
    }

    Ok(entries)
}
