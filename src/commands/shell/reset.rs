use crate::areas::session::Session;

impl Session {
    /// `reset`, the one verb that is always available
    ///
    /// Replaces the whole session atomically: repository state and
    /// transcript, welcome banner included. Trailing tokens are ignored and
    /// the command itself logs no entry.
    pub(crate) fn reset(&mut self) {
        *self = Session::new();
    }
}
