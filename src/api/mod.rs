//! Array Metadata Client
//!
//! Typed, authenticated reads against the array management API. The
//! [`ArrayMetadata`] trait is the seam between the resolvers and the wire;
//! [`ArrayClient`] is the production implementation, tests substitute
//! in-memory fakes.

mod client;
mod types;

pub use client::{ArrayClient, ArrayClientConfig};
pub use types::{
    BuftreeMapping, ClusterRef, DestinationRef, RecordsEnvelope, RelationshipDetail,
    RelationshipSummary, SourceRef, TargetDetail, TargetSummary, VolumeRecord,
};

use crate::error::Result;
use async_trait::async_trait;

/// Read access to the array's relationship, target, volume, and
/// object-store mapping endpoints
#[async_trait]
pub trait ArrayMetadata: Send + Sync {
    /// List all snapmirror relationships on the cluster
    async fn fetch_relationships(&self) -> Result<Vec<RelationshipSummary>>;

    /// Fetch the detail record for one relationship
    async fn fetch_relationship_detail(&self, id: &str) -> Result<RelationshipDetail>;

    /// List all cloud tiering targets on the cluster
    async fn fetch_tiering_targets(&self) -> Result<Vec<TargetSummary>>;

    /// Fetch the detail record for one tiering target
    async fn fetch_tiering_target_detail(&self, id: &str) -> Result<TargetDetail>;

    /// List all volumes via the private CLI endpoint
    async fn fetch_volumes(&self) -> Result<Vec<VolumeRecord>>;

    /// List volume-to-buftree mappings via the private CLI endpoint
    async fn fetch_object_store_mappings(&self) -> Result<Vec<BuftreeMapping>>;
}
