/// Errors a playback backend may surface. They never propagate past the
/// soundtrack policy.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("audio backend unavailable: {0}")]
    Backend(String),
}

/// A playback backend for one looped track.
pub trait AudioSink {
    /// Begin looped playback from the start.
    fn start_loop(&mut self) -> Result<(), AudioError>;
    /// Halt playback, keeping position.
    fn pause(&mut self) -> Result<(), AudioError>;
    /// Continue playback from the paused position.
    fn resume(&mut self) -> Result<(), AudioError>;
}

/// Backend that plays nothing. Stand-in for a real device-backed sink.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn start_loop(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn pause(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn resume(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Soundtrack policy: when to start, pause, and resume the loop.
///
/// Playback starts on the first input event only. After that the track
/// follows the session's pause toggle. Backend errors are logged and
/// swallowed; a dead audio device must not end the run.
#[derive(Debug)]
pub struct Soundtrack<S: AudioSink> {
    sink: S,
    started: bool,
}

impl<S: AudioSink> Soundtrack<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            started: false,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Call on every input event; only the first one starts the loop.
    pub fn on_input(&mut self) {
        if self.started {
            return;
        }
        if let Err(err) = self.sink.start_loop() {
            tracing::warn!(%err, "soundtrack failed to start");
        }
        self.started = true;
    }

    /// Call whenever the session's pause flag flips.
    pub fn on_pause_changed(&mut self, paused: bool) {
        if !self.started {
            return;
        }
        let result = if paused {
            self.sink.pause()
        } else {
            self.sink.resume()
        };
        if let Err(err) = result {
            tracing::warn!(%err, paused, "soundtrack pause/resume failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that records calls and optionally fails everything.
    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<&'static str>,
        fail: bool,
    }

    impl AudioSink for RecordingSink {
        fn start_loop(&mut self) -> Result<(), AudioError> {
            self.calls.push("start");
            self.check()
        }

        fn pause(&mut self) -> Result<(), AudioError> {
            self.calls.push("pause");
            self.check()
        }

        fn resume(&mut self) -> Result<(), AudioError> {
            self.calls.push("resume");
            self.check()
        }
    }

    impl RecordingSink {
        fn check(&self) -> Result<(), AudioError> {
            if self.fail {
                Err(AudioError::Backend("no device".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn starts_once_on_first_input() {
        let mut track = Soundtrack::new(RecordingSink::default());
        assert!(!track.started());
        track.on_input();
        track.on_input();
        track.on_input();
        assert!(track.started());
        assert_eq!(track.sink.calls, vec!["start"]);
    }

    #[test]
    fn follows_pause_toggle_in_lockstep() {
        let mut track = Soundtrack::new(RecordingSink::default());
        track.on_input();
        track.on_pause_changed(true);
        track.on_pause_changed(false);
        assert_eq!(track.sink.calls, vec!["start", "pause", "resume"]);
    }

    #[test]
    fn pause_before_first_input_does_nothing() {
        let mut track = Soundtrack::new(RecordingSink::default());
        track.on_pause_changed(true);
        assert!(track.sink.calls.is_empty());
    }

    #[test]
    fn backend_failure_is_swallowed() {
        let sink = RecordingSink {
            fail: true,
            ..RecordingSink::default()
        };
        let mut track = Soundtrack::new(sink);
        track.on_input();
        track.on_pause_changed(true);
        // Still considered started; gameplay proceeds regardless.
        assert!(track.started());
        assert_eq!(track.sink.calls, vec!["start", "pause"]);
    }
}
