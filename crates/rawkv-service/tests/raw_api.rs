//! Integration tests for the raw API over real on-disk storage.

use std::sync::Arc;

use tempfile::TempDir;

use rawkv_service::RawKvService;
use rawkv_storage::StandaloneStorage;
use rawkv_types::{RawDeleteRequest, RawGetRequest, RawPutRequest, RawScanRequest};

fn create_service() -> (RawKvService<StandaloneStorage>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(StandaloneStorage::open(temp_dir.path()).unwrap());
    (RawKvService::new(storage), temp_dir)
}

fn get_req(cf: &str, key: &[u8]) -> RawGetRequest {
    RawGetRequest {
        cf: cf.to_string(),
        key: key.to_vec(),
    }
}

fn put_req(cf: &str, key: &[u8], value: &[u8]) -> RawPutRequest {
    RawPutRequest {
        cf: cf.to_string(),
        key: key.to_vec(),
        value: value.to_vec(),
    }
}

fn scan_req(cf: &str, start: &[u8], limit: u32) -> RawScanRequest {
    RawScanRequest {
        cf: cf.to_string(),
        start_key: start.to_vec(),
        limit,
    }
}

#[test]
fn roundtrip_arbitrary_bytes() {
    let (service, _temp) = create_service();

    let key = vec![0u8, 255, 1, 128, 0];
    let value = vec![42u8, 0, 0, 7];
    let resp = service.raw_put(&put_req("default", &key, &value));
    assert!(resp.error.is_none());

    let resp = service.raw_get(&get_req("default", &key));
    assert!(!resp.not_found);
    assert_eq!(resp.value, value);
}

#[test]
fn roundtrip_empty_value() {
    let (service, _temp) = create_service();

    service.raw_put(&put_req("default", b"k", b""));
    let resp = service.raw_get(&get_req("default", b"k"));
    // An empty value is present, not absent
    assert!(!resp.not_found);
    assert!(resp.value.is_empty());
    assert!(resp.error.is_none());
}

#[test]
fn delete_then_get_absent() {
    let (service, _temp) = create_service();

    service.raw_put(&put_req("default", b"k", b"v"));
    let resp = service.raw_delete(&RawDeleteRequest {
        cf: "default".to_string(),
        key: b"k".to_vec(),
    });
    assert!(resp.error.is_none());

    let resp = service.raw_get(&get_req("default", b"k"));
    assert!(resp.not_found);
}

#[test]
fn column_families_are_isolated() {
    let (service, _temp) = create_service();

    service.raw_put(&put_req("cf1", b"k", b"v1"));
    service.raw_put(&put_req("cf2", b"k", b"v2"));

    assert_eq!(service.raw_get(&get_req("cf1", b"k")).value, b"v1");
    assert_eq!(service.raw_get(&get_req("cf2", b"k")).value, b"v2");

    // Deleting in one cf leaves the other untouched
    service.raw_delete(&RawDeleteRequest {
        cf: "cf1".to_string(),
        key: b"k".to_vec(),
    });
    assert!(service.raw_get(&get_req("cf1", b"k")).not_found);
    assert_eq!(service.raw_get(&get_req("cf2", b"k")).value, b"v2");
}

#[test]
fn scan_returns_ascending_order() {
    let (service, _temp) = create_service();

    service.raw_put(&put_req("cf", b"b", b"2"));
    service.raw_put(&put_req("cf", b"a", b"1"));
    service.raw_put(&put_req("cf", b"c", b"3"));

    let resp = service.raw_scan(&scan_req("cf", b"", 10));
    assert!(resp.error.is_none());
    let keys: Vec<&[u8]> = resp.kvs.iter().map(|p| p.key.as_slice()).collect();
    assert_eq!(keys, vec![b"a".as_slice(), b"b".as_slice(), b"c".as_slice()]);
}

#[test]
fn scan_respects_limit() {
    let (service, _temp) = create_service();

    for key in [b"a", b"b", b"c", b"d", b"e"] {
        service.raw_put(&put_req("cf", key, b"v"));
    }

    let resp = service.raw_scan(&scan_req("cf", b"", 2));
    assert_eq!(resp.kvs.len(), 2);
    assert_eq!(resp.kvs[0].key, b"a");
    assert_eq!(resp.kvs[1].key, b"b");

    // Fewer matching keys than the limit: exactly the count >= start
    let resp = service.raw_scan(&scan_req("cf", b"d", 10));
    assert_eq!(resp.kvs.len(), 2);
    assert_eq!(resp.kvs[0].key, b"d");
    assert_eq!(resp.kvs[1].key, b"e");
}

#[test]
fn scan_does_not_leak_other_column_families() {
    let (service, _temp) = create_service();

    service.raw_put(&put_req("a", b"k1", b"v"));
    service.raw_put(&put_req("ab", b"k2", b"v"));
    service.raw_put(&put_req("b", b"k3", b"v"));

    let resp = service.raw_scan(&scan_req("a", b"", 10));
    assert_eq!(resp.kvs.len(), 1);
    assert_eq!(resp.kvs[0].key, b"k1");
}

#[test]
fn concrete_scenario_two_puts_then_scan() {
    let (service, _temp) = create_service();

    service.raw_put(&put_req("default", b"a", b"1"));
    service.raw_put(&put_req("default", b"b", b"2"));

    let resp = service.raw_scan(&scan_req("default", b"a", 10));
    assert!(resp.error.is_none());
    assert_eq!(resp.kvs.len(), 2);
    assert_eq!(resp.kvs[0].key, b"a");
    assert_eq!(resp.kvs[0].value, b"1");
    assert_eq!(resp.kvs[1].key, b"b");
    assert_eq!(resp.kvs[1].value, b"2");
}

#[test]
fn concurrent_readers_and_writers() {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(StandaloneStorage::open(temp_dir.path()).unwrap());
    let service = Arc::new(RawKvService::new(storage));

    let mut handles = Vec::new();
    for worker in 0..4u8 {
        let service = Arc::clone(&service);
        handles.push(std::thread::spawn(move || {
            for i in 0..50u8 {
                let key = vec![worker, i];
                let resp = service.raw_put(&RawPutRequest {
                    cf: "default".to_string(),
                    key: key.clone(),
                    value: vec![i],
                });
                assert!(resp.error.is_none());

                let resp = service.raw_get(&RawGetRequest {
                    cf: "default".to_string(),
                    key,
                });
                assert!(resp.error.is_none());
                assert_eq!(resp.value, vec![i]);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let resp = service.raw_scan(&RawScanRequest {
        cf: "default".to_string(),
        start_key: Vec::new(),
        limit: 1000,
    });
    assert_eq!(resp.kvs.len(), 200);
}
