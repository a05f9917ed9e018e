//! Processing-environment handles.
//!
//! The host hands the session an environment from which the tool handles
//! are drawn. Some build drivers wrap the real environment in a proxy; the
//! session asks for the underlying environment once at initialization and
//! silently keeps what it was given when nothing is exposed. There is no
//! error path: adaptation either succeeds or falls back to identity.

use std::rc::Rc;

use gild_common::Reporter;

/// The host-supplied processing environment.
pub trait HostEnv {
    /// The diagnostic sink this environment routes notes to.
    fn reporter(&self) -> Rc<dyn Reporter>;

    /// The environment this handle wraps, when it is a proxy.
    ///
    /// The default says "not a proxy"; only wrapping drivers override it.
    fn inner(&self) -> Option<&dyn HostEnv> {
        None
    }
}

/// Resolve the innermost environment behind any chain of proxy wrappers.
///
/// Falls back to `env` itself when no wrapper exposes an inner handle.
pub fn unwrap_env(env: &dyn HostEnv) -> &dyn HostEnv {
    let mut current = env;
    while let Some(inner) = current.inner() {
        current = inner;
    }
    current
}

/// A minimal owning environment for hosts without a wrapping build driver.
pub struct BasicEnv {
    reporter: Rc<dyn Reporter>,
}

impl BasicEnv {
    pub fn new(reporter: Rc<dyn Reporter>) -> Self {
        Self { reporter }
    }
}

impl HostEnv for BasicEnv {
    fn reporter(&self) -> Rc<dyn Reporter> {
        self.reporter.clone()
    }
}
