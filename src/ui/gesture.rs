//! Swipe recognition.
//!
//! Each input source (pointer, touch) tracks at most one active drag,
//! started on press and resolved on release. A release turns the drag into
//! a [`GestureSample`], and [`GestureSample::decide`] maps it to a swipe:
//! a drag released to the right goes back, to the left goes forward.

/// Default minimum horizontal travel, in pixels, for a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Independent streams feeding the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Pointer,
    Touch,
}

/// Navigation requested by a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Travel within the threshold.
    None,
    /// Released toward the right: previous page.
    Back,
    /// Released toward the left: next page.
    Forward,
}

/// What the front end should do with the current move event.
///
/// The terminal front end has no default scrolling to suppress, so it only
/// logs this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragFeedback {
    /// Let the default scrolling happen.
    Passthrough,
    /// The drag is a horizontal swipe; suppress default scrolling.
    SuppressScroll,
}

/// Start and end of one completed gesture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start_x: f32,
    pub end_x: f32,
}

impl GestureSample {
    pub fn distance(&self) -> f32 {
        self.end_x - self.start_x
    }

    pub fn decide(&self, threshold: f32) -> Swipe {
        let distance = self.distance();
        if distance.abs() <= threshold {
            Swipe::None
        } else if distance > 0.0 {
            Swipe::Back
        } else {
            Swipe::Forward
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureRecognizer {
    threshold: f32,
    pointer: Option<f32>,
    touch: Option<f32>,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl GestureRecognizer {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            pointer: None,
            touch: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_dragging(&self, source: InputSource) -> bool {
        self.slot(source).is_some()
    }

    /// Start a drag for `source`, replacing any drag it left unresolved.
    pub fn press(&mut self, source: InputSource, x: f32) {
        *self.slot_mut(source) = Some(x);
    }

    /// Intermediate position of the drag for `source`.
    pub fn drag(&self, source: InputSource, x: f32) -> DragFeedback {
        match self.slot(source) {
            Some(start_x) if (x - start_x).abs() > self.threshold => DragFeedback::SuppressScroll,
            _ => DragFeedback::Passthrough,
        }
    }

    /// End the drag for `source` and decide the swipe. A release without a
    /// matching press resolves nothing.
    pub fn release(&mut self, source: InputSource, x: f32) -> Swipe {
        match self.slot_mut(source).take() {
            Some(start_x) => {
                let sample = GestureSample { start_x, end_x: x };
                let swipe = sample.decide(self.threshold);
                tracing::trace!(?source, distance = sample.distance(), ?swipe, "Gesture resolved");
                swipe
            }
            None => Swipe::None,
        }
    }

    /// Drop the drag for `source` without resolving it, e.g. when the
    /// pointer leaves the tracked surface.
    pub fn cancel(&mut self, source: InputSource) {
        if self.slot_mut(source).take().is_some() {
            tracing::trace!(?source, "Gesture cancelled");
        }
    }

    fn slot(&self, source: InputSource) -> Option<f32> {
        match source {
            InputSource::Pointer => self.pointer,
            InputSource::Touch => self.touch,
        }
    }

    fn slot_mut(&mut self, source: InputSource) -> &mut Option<f32> {
        match source {
            InputSource::Pointer => &mut self.pointer,
            InputSource::Touch => &mut self.touch,
        }
    }
}
