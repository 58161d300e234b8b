//! Synchronous bridge to the UI thread.
//!
//! Exactly one thread owns the [`Display`]. Every other thread runs code
//! against it by sending a job over an unbounded channel and blocking on a
//! one-shot reply. Jobs run strictly in arrival order.
//!
//! ```text
//! test thread ──Request::Run(job)──▶ UI thread
//!      ▲                                 │ job(&display)
//!      └──────────oneshot reply──────────┘
//! ```

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::thread::{self, JoinHandle, ThreadId};

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use super::display::Display;
use crate::core::constants::UI_THREAD_NAME;
use crate::core::error::panic_message;
use crate::core::{Error, Result};

type Job = Box<dyn FnOnce(&Display) + Send>;

enum Request {
    Run(Job),
    Shutdown,
}

thread_local! {
    /// The display owned by the current thread, set only on the UI thread.
    static CURRENT_DISPLAY: RefCell<Option<Rc<Display>>> = const { RefCell::new(None) };
}

/// The running UI thread.
///
/// Dropping it stops the thread after the already queued jobs have run.
pub struct UiThread {
    handle: UiHandle,
    join: Option<JoinHandle<()>>,
}

impl UiThread {
    /// Starts the UI thread with an empty display.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn() -> Result<Self> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let join = thread::Builder::new()
            .name(UI_THREAD_NAME.to_string())
            .spawn(move || run_loop(receiver))?;
        let handle = UiHandle { sender, thread_id: join.thread().id() };
        debug!(thread = UI_THREAD_NAME, "UI thread started");
        Ok(Self { handle, join: Some(join) })
    }

    /// Returns a cloneable handle for running code on the UI thread.
    #[must_use]
    pub fn handle(&self) -> UiHandle { self.handle.clone() }
}

impl Drop for UiThread {
    fn drop(&mut self) {
        // The receiver may already be gone if the thread died.
        let _ = self.handle.sender.send(Request::Shutdown);
        if self.handle.is_ui_thread() {
            return;
        }
        if let Some(join) = self.join.take()
            && join.join().is_err()
        {
            warn!("UI thread terminated abnormally");
        }
    }
}

impl std::fmt::Debug for UiThread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiThread").field("thread_id", &self.handle.thread_id).finish()
    }
}

fn run_loop(mut receiver: mpsc::UnboundedReceiver<Request>) {
    let display = Rc::new(Display::new());
    CURRENT_DISPLAY.with(|current| *current.borrow_mut() = Some(Rc::clone(&display)));

    while let Some(request) = receiver.blocking_recv() {
        match request {
            Request::Run(job) => job(&display),
            Request::Shutdown => break,
        }
    }

    CURRENT_DISPLAY.with(|current| current.borrow_mut().take());
    debug!(thread = UI_THREAD_NAME, "UI thread stopped");
}

/// A cloneable, `Send` handle to the UI thread.
#[derive(Clone)]
pub struct UiHandle {
    sender: mpsc::UnboundedSender<Request>,
    thread_id: ThreadId,
}

impl std::fmt::Debug for UiHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiHandle").field("thread_id", &self.thread_id).finish()
    }
}

impl UiHandle {
    /// Returns true if the caller is running on the UI thread.
    #[must_use]
    pub fn is_ui_thread(&self) -> bool { thread::current().id() == self.thread_id }

    /// Runs `f` on the UI thread and returns its result, blocking the caller.
    ///
    /// Called from the UI thread itself (e.g. inside a listener), `f` runs
    /// inline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UiTaskPanicked`] if `f` panics and
    /// [`Error::UiThreadGone`] if the UI thread has stopped.
    pub fn sync_exec<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Display) -> T + Send + 'static,
    {
        if self.is_ui_thread() {
            let display = CURRENT_DISPLAY
                .with(|current| current.borrow().clone())
                .ok_or(Error::UiThreadGone)?;
            return panic::catch_unwind(AssertUnwindSafe(|| f(&display)))
                .map_err(|payload| Error::UiTaskPanicked(panic_message(payload.as_ref())));
        }

        let (reply, response) = oneshot::channel();
        let job: Job = Box::new(move |display| {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| f(display)))
                .map_err(|payload| panic_message(payload.as_ref()));
            // The caller only disappears if its thread died while blocked.
            let _ = reply.send(outcome);
        });
        self.sender.send(Request::Run(job)).map_err(|_| Error::UiThreadGone)?;

        response
            .blocking_recv()
            .map_err(|_| Error::UiThreadGone)?
            .map_err(Error::UiTaskPanicked)
    }

    /// Like [`Self::sync_exec`] for closures that are fallible themselves.
    ///
    /// # Errors
    ///
    /// Returns the closure's error or a bridge error.
    pub fn sync_try<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Display) -> Result<T> + Send + 'static,
    {
        self.sync_exec(f)?
    }

    /// Queues `f` on the UI thread without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UiThreadGone`] if the UI thread has stopped.
    pub fn async_exec<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&Display) + Send + 'static,
    {
        let job: Job = Box::new(move |display| {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| f(display))) {
                warn!(error = %panic_message(payload.as_ref()), "asynchronous UI task panicked");
            }
        });
        self.sender.send(Request::Run(job)).map_err(|_| Error::UiThreadGone)
    }
}
