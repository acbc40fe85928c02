//! Keys and namespaces for the attribute exchange model
//!
//! Keys are bounded string identifiers compared by exact byte content —
//! no normalization. Keys beginning with the reserved prefix are defined
//! by the system and must not be redefined by applications; unprefixed
//! keys are free for producer use.
//!
//! The bounds here are fixed-capacity layout limits: any wire encoder
//! must respect them as hard upper bounds when sizing buffers. Both are
//! counted including one terminator unit, so the usable payload is one
//! unit shorter.
//!
//! The registry holds no mutable state — it is a pure set of rules plus
//! a static catalog of the reserved keys.

use crate::status::{Result, Status};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum key length in bytes, including the terminator unit.
pub const MAX_KEY_LEN: usize = 512;

/// Maximum namespace length in bytes, including the terminator unit.
pub const MAX_NS_LEN: usize = 256;

/// Maximum encoded length of a single value payload, in bytes.
///
/// Part of the fixed-capacity layout catalog alongside [`MAX_KEY_LEN`]
/// and [`MAX_NS_LEN`]: a hard upper bound wire encoders must respect
/// when sizing per-value buffers. The in-memory model itself does not
/// enforce it — values here are heap-owned and unbounded.
pub const MAX_VAL_LEN: usize = 1024;

/// Prefix marking system-defined keys.
pub const RESERVED_PREFIX: &str = "attrex.";

/// Validate a raw key string.
///
/// Fails with `InvalidKeyLength` if the encoded length (including the
/// terminator unit) exceeds [`MAX_KEY_LEN`], and with `InvalidKey` for an
/// empty key. The bound is exact: a key of `MAX_KEY_LEN - 1` bytes is
/// legal, one byte more is not.
pub fn validate(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Status::InvalidKey);
    }
    if key.len() + 1 > MAX_KEY_LEN {
        return Err(Status::InvalidKeyLength);
    }
    Ok(())
}

/// True iff `key` begins with the reserved prefix.
pub fn is_reserved(key: &str) -> bool {
    key.starts_with(RESERVED_PREFIX)
}

/// A validated attribute key.
///
/// Construction goes through [`Key::new`] (or `FromStr`), so a `Key` in
/// hand is always within bounds.
///
/// # Examples
///
/// ```
/// use attrex_core::{Key, Status};
///
/// let key = Key::new("attrex.rank").unwrap();
/// assert!(key.is_reserved());
///
/// let app_key = Key::new("my.app.setting").unwrap();
/// assert!(!app_key.is_reserved());
///
/// let too_long = "k".repeat(512);
/// assert_eq!(Key::new(too_long), Err(Status::InvalidKeyLength));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Create a key, validating its length.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate(&key)?;
        Ok(Key(key))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encoded length in bytes, excluding the terminator unit.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty; always false for a validated key.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff this key is system-defined.
    pub fn is_reserved(&self) -> bool {
        is_reserved(&self.0)
    }
}

impl FromStr for Key {
    type Err = Status;

    fn from_str(s: &str) -> Result<Self> {
        Key::new(s)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated namespace identifier, scoping ranks and published data.
///
/// The empty namespace is legal and is the default; it denotes "not yet
/// assigned" in records built before the resource manager names the job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
    /// Create a namespace, validating its length against [`MAX_NS_LEN`].
    pub fn new(ns: impl Into<String>) -> Result<Self> {
        let ns = ns.into();
        if ns.len() + 1 > MAX_NS_LEN {
            return Err(Status::InvalidNamespace);
        }
        Ok(Namespace(ns))
    }

    /// The namespace as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encoded length in bytes, excluding the terminator unit.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the unassigned namespace.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Namespace {
    type Err = Status;

    fn from_str(s: &str) -> Result<Self> {
        Namespace::new(s)
    }
}

impl AsRef<str> for Namespace {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub mod reserved {
    //! The reserved-key catalog
    //!
    //! System attributes published by the resource manager, as opposed to
    //! values the application chooses to expose. Consumers must handle
    //! the not-found condition for any of them: the set a given manager
    //! actually provides varies.
    //!
    //! Each constant documents the expected [`DataType`] of the value it
    //! is bound to; [`expected_type`] answers the same question at
    //! runtime from the static table.

    use crate::value::DataType;

    /// Marker used internally to request all job-related info at once.
    /// Expected type: `Undef` (the key alone is the request).
    pub const JOBINFO: &str = "attrex.jobinfo";
    /// Cpu bitmap applied to the process upon launch. Expected: `String`.
    pub const CPUSET: &str = "attrex.cpuset";
    /// Security credential assigned to the process. Expected: `Buffer`.
    pub const CREDENTIAL: &str = "attrex.cred";
    /// Name of the host this process is on. Expected: `String`.
    pub const HOSTNAME: &str = "attrex.hname";
    /// Whether this process was spawned by a peer request, as a 0/1 flag.
    /// Expected: `Uint8`.
    pub const SPAWNED: &str = "attrex.spawned";
    /// Top-level tmp directory assigned to the session. Expected: `String`.
    pub const TMPDIR: &str = "attrex.tmpdir";
    /// Job identifier assigned by the scheduler. Expected: `String`.
    pub const JOBID: &str = "attrex.jobid";
    /// App number within the job. Expected: `Uint32`.
    pub const APPNUM: &str = "attrex.appnum";
    /// Process rank within the job. Expected: `Uint32`.
    pub const RANK: &str = "attrex.rank";
    /// Rank spanning all jobs in this session. Expected: `Uint32`.
    pub const GLOBAL_RANK: &str = "attrex.grank";
    /// Rank within this app. Expected: `Uint32`.
    pub const APP_RANK: &str = "attrex.apprank";
    /// Starting global rank of this job. Expected: `Uint32`.
    pub const NPROC_OFFSET: &str = "attrex.offset";
    /// Rank on this node within this job. Expected: `Uint16`.
    pub const LOCAL_RANK: &str = "attrex.lrank";
    /// Rank on this node spanning all jobs. Expected: `Uint16`.
    pub const NODE_RANK: &str = "attrex.nrank";
    /// Identifier of the lowest rank on this node within this job.
    /// Expected: `Uint64`.
    pub const LOCAL_LDR: &str = "attrex.lldr";
    /// Lowest rank in this app within this job. Expected: `Uint32`.
    pub const APP_LDR: &str = "attrex.aldr";
    /// Packed map of process locations within this job. Expected: `Buffer`.
    pub const PROC_MAP: &str = "attrex.map";
    /// Comma-delimited ranks on this node within this job.
    /// Expected: `String`.
    pub const LOCAL_PEERS: &str = "attrex.lpeers";
    /// Packed names and cpusets of local peers. Expected: `Buffer`.
    pub const LOCAL_CPUSETS: &str = "attrex.lcpus";
    /// Number of processes in this namespace. Expected: `Uint32`.
    pub const UNIV_SIZE: &str = "attrex.univ.size";
    /// Number of processes in this job. Expected: `Uint32`.
    pub const JOB_SIZE: &str = "attrex.job.size";
    /// Number of processes in this job on this node. Expected: `Uint32`.
    pub const LOCAL_SIZE: &str = "attrex.local.size";
    /// Number of processes across all jobs on this node.
    /// Expected: `Uint32`.
    pub const NODE_SIZE: &str = "attrex.node.size";
    /// Maximum number of processes for this job. Expected: `Uint32`.
    pub const MAX_PROCS: &str = "attrex.max.size";
    /// Network topology blob. Expected: `Buffer`.
    pub const NET_TOPO: &str = "attrex.ntopo";
    /// Local node topology handle. Expected: `Topology`.
    pub const LOCAL_TOPO: &str = "attrex.ltopo";

    /// One entry of the reserved-key catalog.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ReservedKey {
        /// The key string, including the reserved prefix.
        pub name: &'static str,
        /// The discriminant a consumer should expect on the bound value.
        pub data_type: DataType,
    }

    /// The full catalog, one entry per reserved key.
    pub static RESERVED: &[ReservedKey] = &[
        ReservedKey { name: JOBINFO, data_type: DataType::Undef },
        ReservedKey { name: CPUSET, data_type: DataType::String },
        ReservedKey { name: CREDENTIAL, data_type: DataType::Buffer },
        ReservedKey { name: HOSTNAME, data_type: DataType::String },
        ReservedKey { name: SPAWNED, data_type: DataType::Uint8 },
        ReservedKey { name: TMPDIR, data_type: DataType::String },
        ReservedKey { name: JOBID, data_type: DataType::String },
        ReservedKey { name: APPNUM, data_type: DataType::Uint32 },
        ReservedKey { name: RANK, data_type: DataType::Uint32 },
        ReservedKey { name: GLOBAL_RANK, data_type: DataType::Uint32 },
        ReservedKey { name: APP_RANK, data_type: DataType::Uint32 },
        ReservedKey { name: NPROC_OFFSET, data_type: DataType::Uint32 },
        ReservedKey { name: LOCAL_RANK, data_type: DataType::Uint16 },
        ReservedKey { name: NODE_RANK, data_type: DataType::Uint16 },
        ReservedKey { name: LOCAL_LDR, data_type: DataType::Uint64 },
        ReservedKey { name: APP_LDR, data_type: DataType::Uint32 },
        ReservedKey { name: PROC_MAP, data_type: DataType::Buffer },
        ReservedKey { name: LOCAL_PEERS, data_type: DataType::String },
        ReservedKey { name: LOCAL_CPUSETS, data_type: DataType::Buffer },
        ReservedKey { name: UNIV_SIZE, data_type: DataType::Uint32 },
        ReservedKey { name: JOB_SIZE, data_type: DataType::Uint32 },
        ReservedKey { name: LOCAL_SIZE, data_type: DataType::Uint32 },
        ReservedKey { name: NODE_SIZE, data_type: DataType::Uint32 },
        ReservedKey { name: MAX_PROCS, data_type: DataType::Uint32 },
        ReservedKey { name: NET_TOPO, data_type: DataType::Buffer },
        ReservedKey { name: LOCAL_TOPO, data_type: DataType::Topology },
    ];

    /// Look up the expected discriminant for a reserved key.
    ///
    /// Returns `None` for keys outside the catalog, including unreserved
    /// application keys.
    pub fn expected_type(key: &str) -> Option<DataType> {
        RESERVED
            .iter()
            .find(|entry| entry.name == key)
            .map(|entry| entry.data_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::DataType;
    use proptest::prelude::*;

    #[test]
    fn test_key_at_bound_succeeds() {
        // MAX_KEY_LEN counts the terminator, so the longest legal payload
        // is one byte shorter.
        let key = "k".repeat(MAX_KEY_LEN - 1);
        assert!(Key::new(key).is_ok());
    }

    #[test]
    fn test_key_one_over_bound_fails() {
        let key = "k".repeat(MAX_KEY_LEN);
        assert_eq!(Key::new(key), Err(Status::InvalidKeyLength));
    }

    #[test]
    fn test_empty_key_fails() {
        assert_eq!(Key::new(""), Err(Status::InvalidKey));
    }

    #[test]
    fn test_namespace_bounds() {
        assert!(Namespace::new("n".repeat(MAX_NS_LEN - 1)).is_ok());
        assert_eq!(
            Namespace::new("n".repeat(MAX_NS_LEN)),
            Err(Status::InvalidNamespace)
        );
        assert!(Namespace::new("").is_ok());
        assert!(Namespace::default().is_empty());
    }

    #[test]
    fn test_reserved_prefix_detection() {
        assert!(is_reserved("attrex.rank"));
        assert!(!is_reserved("rank"));
        // Exact byte comparison: no normalization of case.
        assert!(!is_reserved("Attrex.rank"));
        assert!(Key::new(reserved::RANK).unwrap().is_reserved());
        assert!(!Key::new("myapp.rank").unwrap().is_reserved());
    }

    #[test]
    fn test_reserved_catalog_is_well_formed() {
        for entry in reserved::RESERVED {
            assert!(is_reserved(entry.name), "{} lacks prefix", entry.name);
            assert!(validate(entry.name).is_ok());
        }
        // Names are unique.
        let mut names: Vec<_> = reserved::RESERVED.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), reserved::RESERVED.len());
    }

    #[test]
    fn test_expected_type_lookup() {
        assert_eq!(
            reserved::expected_type(reserved::RANK),
            Some(DataType::Uint32)
        );
        assert_eq!(
            reserved::expected_type(reserved::HOSTNAME),
            Some(DataType::String)
        );
        assert_eq!(
            reserved::expected_type(reserved::PROC_MAP),
            Some(DataType::Buffer)
        );
        assert_eq!(reserved::expected_type("myapp.rank"), None);
        assert_eq!(reserved::expected_type("attrex.unknown"), None);
    }

    #[test]
    fn test_key_parse_and_display() {
        let key: Key = "attrex.hname".parse().unwrap();
        assert_eq!(key.to_string(), "attrex.hname");
        assert_eq!(key.as_ref(), "attrex.hname");
        assert_eq!(key.len(), 12);
        assert!(!key.is_empty());
        let err: Result<Key> = "".parse();
        assert_eq!(err, Err(Status::InvalidKey));
    }

    #[test]
    fn test_layout_bounds() {
        // The fixed-capacity catalog a wire encoder sizes buffers from.
        assert_eq!(MAX_KEY_LEN, 512);
        assert_eq!(MAX_NS_LEN, 256);
        assert_eq!(MAX_VAL_LEN, 1024);
    }

    #[test]
    fn test_key_serde_round_trip() {
        let key = Key::new("attrex.rank").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"attrex.rank\"");
        let back: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(key, back);
    }

    proptest! {
        #[test]
        fn prop_key_length_boundary(len in 1usize..=MAX_KEY_LEN + 64) {
            let raw = "x".repeat(len);
            let result = Key::new(raw);
            if len + 1 <= MAX_KEY_LEN {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(Status::InvalidKeyLength));
            }
        }
    }
}
