/// Contract the host page environment fulfils for the interaction core.
///
/// The anti-forgery token lives in page markup and rotates whenever the
/// server re-renders; implementations must return the value as currently
/// present, never a cached copy.
pub trait PageHandle: Send + Sync {
    /// Current anti-forgery token.
    fn csrf_token(&self) -> String;

    /// Full navigation. The server re-renders session state and every
    /// client-side form state is discarded with the old document.
    fn reload(&self);
}
