use crate::areas::repository::RepositoryState;
use crate::areas::transcript::Transcript;

/// One user session of the simulator
///
/// Owns the repository state and the transcript; there is no ambient or
/// static state anywhere in the crate. Create one per session and pass it by
/// reference to whatever drives it. Command execution lives in
/// `crate::commands` as `impl Session` blocks, one file per verb.
#[derive(Debug)]
pub struct Session {
    repository: RepositoryState,
    transcript: Transcript,
}

impl Session {
    pub fn new() -> Self {
        Self {
            repository: RepositoryState::new(),
            transcript: Transcript::seeded(),
        }
    }

    pub fn repository(&self) -> &RepositoryState {
        &self.repository
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub(crate) fn repository_mut(&mut self) -> &mut RepositoryState {
        &mut self.repository
    }

    pub(crate) fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
