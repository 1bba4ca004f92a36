//! Runs domain actions off the UI thread
//!
//! Each call gets its own worker thread; the result comes back over an
//! `mpsc` channel that the event loop polls on every tick.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use serde_json::Value;

use super::{ActionRequest, CallOptions, DomainAction};
use crate::error::{WizardError, WizardResult};

/// A finished call
#[derive(Debug)]
pub struct ActionOutcome {
    /// The request that was run
    pub request: ActionRequest,
    /// What the method returned
    pub result: WizardResult<Value>,
}

/// A call that is still running
pub struct PendingCall {
    request: ActionRequest,
    options: CallOptions,
    receiver: Receiver<WizardResult<Value>>,
}

impl PendingCall {
    /// The request being run
    pub fn request(&self) -> &ActionRequest {
        &self.request
    }

    /// Whether the UI should block until the call finishes
    pub fn freezes(&self) -> bool {
        self.options.freeze
    }

    /// Check for completion without blocking
    pub fn poll(&self) -> Option<ActionOutcome> {
        match self.receiver.try_recv() {
            Ok(result) => Some(self.outcome(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(self.outcome(Err(WizardError::action(
                &self.request.method,
                "worker stopped without a result",
            )))),
        }
    }

    /// Block until the call finishes
    pub fn wait(self) -> ActionOutcome {
        let result = self.receiver.recv().unwrap_or_else(|_| {
            Err(WizardError::action(
                &self.request.method,
                "worker stopped without a result",
            ))
        });
        ActionOutcome {
            request: self.request,
            result,
        }
    }

    fn outcome(&self, result: WizardResult<Value>) -> ActionOutcome {
        ActionOutcome {
            request: self.request.clone(),
            result,
        }
    }
}

/// Spawns domain-action calls
#[derive(Clone)]
pub struct ActionDispatcher {
    action: Arc<dyn DomainAction>,
}

impl ActionDispatcher {
    /// Dispatch through the given action implementation
    pub fn new(action: Arc<dyn DomainAction>) -> Self {
        Self { action }
    }

    /// Start a call on a worker thread
    pub fn dispatch(&self, request: ActionRequest, options: CallOptions) -> PendingCall {
        let (sender, receiver) = mpsc::channel();
        let action = Arc::clone(&self.action);
        let method = request.method.clone();
        let args = request.args.clone();

        thread::spawn(move || {
            let result = action.call(&method, &args);
            let _ = sender.send(result);
        });

        PendingCall {
            request,
            options,
            receiver,
        }
    }

    /// Run a call on the current thread
    pub fn call_now(&self, request: ActionRequest) -> ActionOutcome {
        let result = self.action.call(&request.method, &request.args);
        ActionOutcome { request, result }
    }
}
