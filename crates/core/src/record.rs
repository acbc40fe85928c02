//! Composite records consumed by external job-launch logic
//!
//! Plain aggregates over already-defined owned fields. Their only
//! nontrivial behavior is release: all-or-nothing over every owned
//! sub-field, and idempotent.

use crate::info::Info;
use crate::key::Namespace;
use crate::status::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A set of ranks within one namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    namespace: Namespace,
    ranks: Vec<i32>,
}

impl Range {
    /// Create a range, validating the namespace bound and taking
    /// ownership of the rank sequence.
    pub fn new(namespace: impl Into<String>, ranks: Vec<i32>) -> Result<Self> {
        Ok(Range {
            namespace: Namespace::new(namespace)?,
            ranks,
        })
    }

    /// The namespace the ranks belong to.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The ranks, in the producer's order.
    pub fn ranks(&self) -> &[i32] {
        &self.ranks
    }

    /// Release the owned rank sequence and reset the namespace.
    ///
    /// Idempotent.
    pub fn release(&mut self) {
        self.namespace = Namespace::default();
        self.ranks = Vec::new();
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{} ranks]", self.namespace, self.ranks.len())
    }
}

/// Descriptor for one application within a spawn request.
///
/// Built with setter-style methods:
///
/// ```
/// use attrex_core::{App, Info, Value};
///
/// let app = App::new("/bin/worker")
///     .arg("--mode")
///     .arg("fast")
///     .env("WORKER_THREADS=4")
///     .maxprocs(8)
///     .info(Info::bind_str("app.priority", Value::from(1u32)).unwrap());
/// assert_eq!(app.argv().len(), 2);
/// assert_eq!(app.max_procs(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct App {
    cmd: String,
    argv: Vec<String>,
    env: Vec<String>,
    maxprocs: i32,
    info: Vec<Info>,
}

impl App {
    /// Create a descriptor for the given command.
    pub fn new(cmd: impl Into<String>) -> Self {
        App {
            cmd: cmd.into(),
            argv: Vec::new(),
            env: Vec::new(),
            maxprocs: 0,
            info: Vec::new(),
        }
    }

    /// Append one command-line argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.argv.push(arg.into());
        self
    }

    /// Append one `NAME=value` environment entry.
    pub fn env(mut self, entry: impl Into<String>) -> Self {
        self.env.push(entry.into());
        self
    }

    /// Set the maximum process count for this app.
    pub fn maxprocs(mut self, maxprocs: i32) -> Self {
        self.maxprocs = maxprocs;
        self
    }

    /// Append one per-app attribute.
    pub fn info(mut self, info: Info) -> Self {
        self.info.push(info);
        self
    }

    /// The command to launch.
    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    /// The argument vector, excluding the command itself.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// The environment entries.
    pub fn env_entries(&self) -> &[String] {
        &self.env
    }

    /// The maximum process count.
    pub fn max_procs(&self) -> i32 {
        self.maxprocs
    }

    /// The per-app attributes.
    pub fn info_entries(&self) -> &[Info] {
        &self.info
    }

    /// Release every owned sub-field: command, argument and environment
    /// vectors, and the attribute sequence. All-or-nothing, idempotent.
    pub fn release(&mut self) {
        self.cmd = String::new();
        self.argv = Vec::new();
        self.env = Vec::new();
        self.maxprocs = 0;
        self.info = Vec::new();
    }
}

/// Data a process publishes for later retrieval by peers.
///
/// The blob is opaque: this model carries it uninterpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModexData {
    namespace: Namespace,
    rank: i32,
    blob: Vec<u8>,
}

impl ModexData {
    /// Create a modex record, validating the namespace bound and taking
    /// ownership of the blob.
    pub fn new(namespace: impl Into<String>, rank: i32, blob: Vec<u8>) -> Result<Self> {
        Ok(ModexData {
            namespace: Namespace::new(namespace)?,
            rank,
            blob,
        })
    }

    /// The publishing process's namespace.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The publishing process's rank.
    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// The published blob.
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Release the owned blob and reset the identity fields.
    ///
    /// Idempotent.
    pub fn release(&mut self) {
        self.namespace = Namespace::default();
        self.rank = 0;
        self.blob = Vec::new();
    }
}
