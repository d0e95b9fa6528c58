//! Typed records decoded from the array management API
//!
//! Field names mirror the wire format; missing fields decode to their
//! defaults the same way the array omits them for unset values.

use serde::Deserialize;

// =============================================================================
// Envelopes
// =============================================================================

/// List responses arrive wrapped in a `{"records": [...]}` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

// =============================================================================
// Snapmirror relationships
// =============================================================================

/// Source side of a relationship; only the path is reported
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceRef {
    #[serde(default)]
    pub path: String,
}

/// Destination side of a relationship: cloud path plus destination UUID
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DestinationRef {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub uuid: String,
}

/// One entry of the relationship listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelationshipSummary {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub destination: DestinationRef,
}

/// Detail record for a single relationship
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelationshipDetail {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub source: SourceRef,
    #[serde(default)]
    pub destination: DestinationRef,
}

// =============================================================================
// Tiering targets
// =============================================================================

/// One entry of the cloud target listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetSummary {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub name: String,
}

/// Owning cluster of a tiering target
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClusterRef {
    #[serde(default)]
    pub name: String,
}

/// Detail record for a single tiering target
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetDetail {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub container: String,
    #[serde(default)]
    pub cluster: ClusterRef,
}

// =============================================================================
// Volumes and object-store mappings (private CLI endpoints)
// =============================================================================

/// One volume as reported by the private CLI volume endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VolumeRecord {
    #[serde(default, rename = "volume")]
    pub name: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default, rename = "vserver")]
    pub server: String,
}

/// Maps a volume UUID to its buftree UUID within a named object store
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuftreeMapping {
    #[serde(default)]
    pub object_store_name: String,
    #[serde(default)]
    pub buftree_uuid: String,
    #[serde(default, rename = "vol_uuid")]
    pub volume_uuid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_listing_decodes() {
        let body = r#"{
            "records": [
                {"uuid": "a1", "destination": {"path": "netapp-backup-east:vol1", "uuid": "d1"}},
                {"uuid": "a2", "destination": {"path": "other:vol2", "uuid": "d2"}}
            ]
        }"#;
        let env: RecordsEnvelope<RelationshipSummary> = serde_json::from_str(body).unwrap();
        assert_eq!(env.records.len(), 2);
        assert_eq!(env.records[0].destination.path, "netapp-backup-east:vol1");
        assert_eq!(env.records[1].uuid, "a2");
    }

    #[test]
    fn test_missing_records_decodes_empty() {
        let env: RecordsEnvelope<VolumeRecord> = serde_json::from_str("{}").unwrap();
        assert!(env.records.is_empty());
    }

    #[test]
    fn test_target_detail_decodes_nested_cluster() {
        let body = r#"{
            "uuid": "t1",
            "name": "StorageAccount",
            "container": "tier-container",
            "cluster": {"name": "east1"}
        }"#;
        let detail: TargetDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.cluster.name, "east1");
        assert_eq!(detail.container, "tier-container");
    }

    #[test]
    fn test_volume_record_renamed_fields() {
        let body = r#"{"volume": "vol_data1", "uuid": "v-1", "vserver": "svm_east1"}"#;
        let vol: VolumeRecord = serde_json::from_str(body).unwrap();
        assert_eq!(vol.name, "vol_data1");
        assert_eq!(vol.server, "svm_east1");
    }

    #[test]
    fn test_buftree_mapping_decodes() {
        let body = r#"{"object_store_name": "StorageAccount", "buftree_uuid": "bt-1", "vol_uuid": "v-1"}"#;
        let map: BuftreeMapping = serde_json::from_str(body).unwrap();
        assert_eq!(map.volume_uuid, "v-1");
        assert_eq!(map.buftree_uuid, "bt-1");
    }
}
