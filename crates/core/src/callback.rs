//! Contracts with the external transport layer
//!
//! The model itself is synchronous; these are the signatures it exposes
//! to the (external) transport that completes operations asynchronously,
//! plus the uniform release entry point callers use on any owned value.

use crate::array::ValueArray;
use crate::info::Info;
use crate::record::{App, ModexData, Range};
use crate::status::Status;
use crate::value::Value;

/// Completion callback for non-blocking operations.
///
/// Invoked by the transport as `(status, value)`; what C-style interfaces
/// pass as a user-context pointer is closure capture here.
///
/// Ownership rule: the callback borrows the delivered value only for the
/// duration of the call — the invoker may release it immediately upon
/// return. A callback that needs to retain the payload must copy it out
/// (`value.clone()`) before returning; the `&Value` borrow makes keeping
/// a reference past the call a compile error rather than a dangling
/// pointer.
pub type ValueCallback<'a> = Box<dyn FnMut(Status, Option<&Value>) + Send + 'a>;

/// Handler invoked by the transport when an asynchronous error occurs
/// outside any pending operation.
pub type ErrorHandler = Box<dyn FnMut(Status) + Send>;

/// Uniform release entry point.
///
/// Invokable by a caller holding any owned model value, regardless of how
/// it was produced; dispatch on the concrete type frees exactly the
/// fields that are owned. Always idempotent, and a no-op for values that
/// own nothing.
pub trait Release {
    /// Release owned payloads and reset to the empty state.
    fn release(&mut self);
}

impl Release for Value {
    fn release(&mut self) {
        Value::release(self);
    }
}

impl Release for ValueArray {
    fn release(&mut self) {
        ValueArray::release(self);
    }
}

impl Release for Info {
    fn release(&mut self) {
        Info::release(self);
    }
}

impl Release for Range {
    fn release(&mut self) {
        Range::release(self);
    }
}

impl Release for App {
    fn release(&mut self) {
        App::release(self);
    }
}

impl Release for ModexData {
    fn release(&mut self) {
        ModexData::release(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deliver a value to a callback the way a transport would: the
    /// callee borrows it for the call, the caller releases right after.
    fn deliver(cb: &mut ValueCallback<'_>, status: Status, value: &mut Value) {
        cb(status, Some(value));
        value.release();
    }

    #[test]
    fn test_callback_copies_out_to_retain() {
        let mut retained: Option<Value> = None;
        {
            let mut cb: ValueCallback<'_> = Box::new(|status, value| {
                assert!(status.is_success());
                // Copy out: the borrow ends when this call returns.
                retained = value.cloned();
            });
            let mut delivered = Value::from("published-payload");
            deliver(&mut cb, Status::Success, &mut delivered);
            assert!(delivered.is_undef());
        }
        assert_eq!(retained.unwrap().as_string(), Ok("published-payload"));
    }

    #[test]
    fn test_callback_reports_failure_without_value() {
        let mut seen = None;
        let mut cb: ValueCallback<'_> = Box::new(|status, value| {
            assert!(value.is_none());
            seen = Some(status);
        });
        cb(Status::NotFound, None);
        drop(cb);
        assert_eq!(seen, Some(Status::NotFound));
    }

    #[test]
    fn test_error_handler() {
        use std::sync::{Arc, Mutex};

        let codes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&codes);
        let mut handler: ErrorHandler =
            Box::new(move |status| sink.lock().unwrap().push(status.code()));
        handler(Status::Unreach);
        handler(Status::Timeout);
        drop(handler);
        assert_eq!(*codes.lock().unwrap(), vec![-13, -12]);
    }

    #[test]
    fn test_release_is_polymorphic() {
        let mut holders: Vec<Box<dyn Release>> = vec![
            Box::new(Value::from("s")),
            Box::new(Info::bind_str("app.k", Value::from(1u32)).unwrap()),
            Box::new(App::new("/bin/x").arg("y")),
            Box::new(Range::new("job-1", vec![0]).unwrap()),
            Box::new(ModexData::new("job-1", 0, vec![1]).unwrap()),
        ];
        for holder in &mut holders {
            holder.release();
            holder.release(); // still a no-op the second time
        }
    }
}
