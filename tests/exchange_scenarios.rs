//! Cross-type scenarios for the exchange model
//!
//! Exercises the model the way a process manager and a launched process
//! would: publish attributes as info pairs, hand them across a callback
//! boundary, copy what must be retained, release everything else.

use attrex::{
    reserved, DataType, Info, ModexData, Range, Scope, Status, Value, ValueArray,
    ValueCallback,
};

#[test]
fn bind_copy_release_rank_attribute() {
    // Producer binds the rank attribute.
    let mut original = Info::bind_str(reserved::RANK, Value::from(3u32)).unwrap();

    // Consumer copies it, producer releases its own.
    let copy = original.clone();
    original.release();

    // The copy reports the same key and value after the original is gone.
    assert_eq!(copy.key().as_str(), "attrex.rank");
    assert_eq!(copy.value().as_uint32(), Ok(3));
}

#[test]
fn reserved_catalog_types_match_published_values() {
    // Publish a plausible job description using the catalog's expected
    // discriminants throughout.
    let attrs = vec![
        Info::bind_str(reserved::JOBID, Value::from("job-2014-06")).unwrap(),
        Info::bind_str(reserved::RANK, Value::from(3u32)).unwrap(),
        Info::bind_str(reserved::LOCAL_RANK, Value::from(1u16)).unwrap(),
        Info::bind_str(reserved::HOSTNAME, Value::from("node-07")).unwrap(),
        Info::bind_str(reserved::UNIV_SIZE, Value::from(64u32)).unwrap(),
        Info::bind_str(reserved::PROC_MAP, Value::buffer(vec![0u8; 16])).unwrap(),
        Info::bind_str(reserved::LOCAL_TOPO, Value::topology(vec![1u8, 2, 3])).unwrap(),
    ];

    for info in &attrs {
        let expected = reserved::expected_type(info.key().as_str())
            .expect("every key above is in the catalog");
        assert_eq!(info.value().data_type(), expected, "{}", info.key());
        assert!(info.key().is_reserved());
    }
}

#[test]
fn multi_valued_attribute_via_value_array() {
    // A multi-valued attribute is an array of nested values under one key.
    let peers = ValueArray::build(
        DataType::Uint32,
        vec![Value::from(0u32), Value::from(1u32), Value::from(3u32)],
    )
    .unwrap();
    let info = Info::bind_str("app.peer.ranks", Value::Array(peers)).unwrap();

    let arr = info.value().as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.element_at(2).unwrap().as_uint32(), Ok(3));
    assert_eq!(arr.element_at(3).unwrap_err(), Status::BadParam);
}

#[test]
fn callback_boundary_copy_out_discipline() {
    // The transport delivers a value the callee may only borrow; whatever
    // it keeps must be copied out before returning.
    let mut retained: Option<Value> = None;
    {
        let mut cb: ValueCallback<'_> = Box::new(|status, value| {
            assert_eq!(status, Status::Success);
            retained = value.cloned();
        });

        let mut delivered = Value::from("node-07");
        cb(Status::Success, Some(&delivered));
        // The caller is permitted to release immediately upon return.
        delivered.release();
        assert!(delivered.is_undef());
    }
    assert_eq!(retained.unwrap().as_string(), Ok("node-07"));
}

#[test]
fn modex_publish_with_scope_metadata() {
    // A process publishes an opaque blob; scope rides alongside for the
    // distribution engine to interpret.
    let record = ModexData::new("job-2014-06", 3, vec![0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
    let scope = Scope::Remote;

    assert_eq!(record.namespace().as_str(), "job-2014-06");
    assert_eq!(record.rank(), 3);
    assert_eq!(record.blob().len(), 4);
    // The model carries the tag, nothing more.
    assert_eq!(scope.code(), 3);

    let mut published = record.clone();
    published.release();
    assert!(published.blob().is_empty());
    assert_eq!(record.blob(), &[0xDE, 0xAD, 0xBE, 0xEF][..]);
}

#[test]
fn spawn_request_round_trips_through_serde() {
    let app = attrex::App::new("/opt/bin/solver")
        .arg("--mesh")
        .arg("input.dat")
        .env("SOLVER_THREADS=4")
        .maxprocs(32)
        .info(Info::bind_str(reserved::MAX_PROCS, Value::from(32u32)).unwrap());
    let range = Range::new("job-2014-06", vec![0, 1, 2, 3]).unwrap();

    let app_json = serde_json::to_string(&app).unwrap();
    let range_json = serde_json::to_string(&range).unwrap();
    let app_back: attrex::App = serde_json::from_str(&app_json).unwrap();
    let range_back: Range = serde_json::from_str(&range_json).unwrap();

    assert_eq!(app, app_back);
    assert_eq!(range, range_back);
    assert_eq!(app_back.max_procs(), 32);
    assert_eq!(range_back.ranks(), &[0, 1, 2, 3][..]);
}

#[test]
fn status_is_the_sole_outcome_vocabulary() {
    // Every failure surfaced by the model is a member of the closed
    // space, representable as a negative code and recoverable from it.
    let failures = [
        Info::bind_str("", Value::Undef).unwrap_err(),
        Info::bind_str("k".repeat(600), Value::Undef).unwrap_err(),
        Value::from(1u32).as_string().unwrap_err(),
        ValueArray::build(DataType::Uint32, vec![Value::from("x")]).unwrap_err(),
        Range::new("n".repeat(300), vec![]).unwrap_err(),
    ];
    for failure in failures {
        let code = failure.code();
        assert!(code < 0 && code >= Status::MIN);
        assert_eq!(Status::from_code(code), Some(failure));
    }
}
