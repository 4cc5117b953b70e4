#![no_main]
extern crate artifacthub_resource;
extern crate libfuzzer_sys;

use artifacthub_resource::client::models::{AvailableVersion, Epoch};
use artifacthub_resource::core::{order_versions, OrderingWarning};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert data to a list of version strings
    let entries: Vec<AvailableVersion> = data
        .split(|&b| b == 0) // Split the input data at null bytes
        .enumerate()
        .map(|(i, slice)| AvailableVersion {
            version: String::from_utf8_lossy(slice).to_string(),
            ts: Epoch::from_timestamp(i as i64).unwrap(),
        })
        .collect();
    let count = entries.len();

    let mut warnings: Vec<OrderingWarning> = Vec::new();
    let ordered = order_versions("fuzz", entries, &mut warnings);

    assert_eq!(ordered.len(), count);
    assert!(warnings.len() <= count);
});
