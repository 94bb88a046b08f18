//! Live snapshot updates driven by the shared change feed.

use std::time::Duration;

use super::helpers::{Crm, crm};
use realtyflow::lifecycle::PendingDeletion;
use realtyflow::sync::CrmSnapshot;
use rstest::rstest;

async fn wait_until(
    snapshots: &mut tokio::sync::watch::Receiver<std::sync::Arc<CrmSnapshot>>,
    condition: impl FnMut(&std::sync::Arc<CrmSnapshot>) -> bool,
) {
    tokio::time::timeout(Duration::from_secs(5), snapshots.wait_for(condition))
        .await
        .expect("snapshot within timeout")
        .expect("sync still running");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn snapshot_follows_every_collection(crm: Crm) {
    let sync = crm.sync();
    let mut snapshots = sync.subscribe();
    let handle = std::sync::Arc::clone(&sync).spawn(&crm.feed);

    let listing = crm.list_property("Apartamento Centro", 600_000).await;
    wait_until(&mut snapshots, |snapshot| snapshot.properties().len() == 1).await;

    let carlos = crm.add_lead("Carlos").await;
    wait_until(&mut snapshots, |snapshot| {
        snapshot
            .leads()
            .iter()
            .any(|lead| lead.property_of_interest() == Some(listing.id()))
    })
    .await;

    crm.coordinator
        .confirm_deletion(PendingDeletion::lead(&carlos))
        .await
        .expect("delete lead");
    wait_until(&mut snapshots, |snapshot| snapshot.leads().is_empty()).await;

    handle.abort();
}
