use std::sync::atomic::{AtomicBool, Ordering};

/// Boolean gate consulted by admin surfaces before offering edit controls.
///
/// The content store is indifferent to authentication; it serves public
/// readers and authenticated editors identically. This is the whole access
/// model; there are no roles or per-section permissions.
pub trait AdminGate: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

/// A gate that is always open. For local tooling and tests.
pub struct OpenGate;

impl AdminGate for OpenGate {
    fn is_authenticated(&self) -> bool {
        true
    }
}

/// Single shared-secret gate: one password for the whole admin panel.
pub struct SharedSecretGate {
    secret: String,
    authenticated: AtomicBool,
}

impl SharedSecretGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            authenticated: AtomicBool::new(false),
        }
    }

    /// Attempt a login; returns whether it succeeded.
    pub fn login(&self, password: &str) -> bool {
        let ok = password == self.secret;
        if ok {
            self.authenticated.store(true, Ordering::SeqCst);
        }
        ok
    }

    pub fn logout(&self) {
        self.authenticated.store(false, Ordering::SeqCst);
    }
}

impl AdminGate for SharedSecretGate {
    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out() {
        let gate = SharedSecretGate::new("s3cret");
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn wrong_password_stays_logged_out() {
        let gate = SharedSecretGate::new("s3cret");
        assert!(!gate.login("guess"));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn login_then_logout() {
        let gate = SharedSecretGate::new("s3cret");
        assert!(gate.login("s3cret"));
        assert!(gate.is_authenticated());

        gate.logout();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn open_gate_is_always_authenticated() {
        assert!(OpenGate.is_authenticated());
    }
}
