/// Terminal audio collaborator.
///
/// A terminal cannot synthesize the cue tones, so the longer ones ring the
/// bell and the short ones (shots, hits, bombs) stay quiet.

use std::io::{stdout, Write};

use space_invaders::feedback::{Audio, Cue};

/// Tones at least this long ring the bell.
const BELL_MIN_SECS: f32 = 0.08;

#[derive(Clone, Debug)]
pub struct Speaker {
    pub enabled: bool,
}

impl Speaker {
    pub fn new(enabled: bool) -> Self {
        Speaker { enabled }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

impl Audio for Speaker {
    fn cue(&mut self, cue: Cue) {
        tracing::trace!(?cue, "audio cue");
        if !self.enabled || cue.tone().duration < BELL_MIN_SECS {
            return;
        }
        let mut out = stdout();
        // Audio is best-effort.
        let _ = out.write_all(b"\x07").and_then(|_| out.flush());
    }
}
