//! Ordered slides with navigation and progress
//!
//! Exactly one slide is visible at a time. Completion percentage is the
//! integer share of done slides; reaching 100 publishes `SetupComplete`
//! once.

use super::signal::{CompletionBus, CompletionEvent, Subscription, SubscriptionId};
use super::slide::Slide;
use crate::error::{WizardError, WizardResult};
use crate::models::SlideDescriptor;

/// Navigation behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceOptions {
    /// Dots cannot be clicked and there is no going back
    pub unidirectional: bool,
    /// Mark done slides on the dots
    pub done_state: bool,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            unidirectional: false,
            done_state: true,
        }
    }
}

/// One progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressDot {
    pub index: usize,
    pub active: bool,
    pub done: bool,
    pub clickable: bool,
}

/// Result of completing a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionUpdate {
    /// Completion after the change
    pub percent: u8,
    /// `SetupComplete` was published by this call
    pub setup_complete: bool,
}

/// The slide container
#[derive(Debug)]
pub struct SlideSequence {
    slides: Vec<Slide>,
    current: usize,
    options: SequenceOptions,
    bus: CompletionBus,
    announced: bool,
}

impl SlideSequence {
    /// Build and render one slide per descriptor, then show the first
    pub fn new(descriptors: Vec<SlideDescriptor>, options: SequenceOptions) -> WizardResult<Self> {
        let slides = descriptors
            .into_iter()
            .enumerate()
            .map(|(id, descriptor)| Slide::new(id, descriptor))
            .collect();
        Self::from_slides(slides, options)
    }

    /// Use already built slides, e.g. ones carrying hooks
    pub fn from_slides(slides: Vec<Slide>, options: SequenceOptions) -> WizardResult<Self> {
        if slides.is_empty() {
            return Err(WizardError::NoSlides);
        }

        let mut sequence = Self {
            slides: slides
                .into_iter()
                .map(|mut slide| {
                    slide.make();
                    slide
                })
                .collect(),
            current: 0,
            options,
            bus: CompletionBus::new(),
            announced: false,
        };
        // a wizard that starts finished has nothing left to announce
        sequence.announced = sequence.is_complete();
        sequence.show_slide(0)?;
        Ok(sequence)
    }

    /// Make slide `index` the only visible one
    pub fn show_slide(&mut self, index: usize) -> WizardResult<()> {
        if index >= self.slides.len() {
            return Err(WizardError::SlideOutOfRange {
                index,
                len: self.slides.len(),
            });
        }

        for slide in &mut self.slides {
            slide.hide();
        }

        let slide = &mut self.slides[index];
        slide.make();
        slide.show();
        self.current = index;
        Ok(())
    }

    /// Show the next slide; returns `false` on the last one
    pub fn next(&mut self) -> bool {
        if !self.next_visible() {
            return false;
        }
        self.show_slide(self.current + 1).is_ok()
    }

    /// Show the previous slide; returns `false` when not allowed
    pub fn prev(&mut self) -> bool {
        if !self.prev_visible() {
            return false;
        }
        self.show_slide(self.current - 1).is_ok()
    }

    /// Whether the "Previous" control is offered
    pub fn prev_visible(&self) -> bool {
        self.current > 0
    }

    /// Whether the "Next" control is offered
    pub fn next_visible(&self) -> bool {
        self.current + 1 < self.slides.len()
    }

    /// Jump to a slide from its progress dot
    pub fn click_dot(&mut self, index: usize) -> WizardResult<bool> {
        if self.options.unidirectional {
            return Ok(false);
        }
        self.show_slide(index)?;
        Ok(true)
    }

    /// State of every progress dot.
    ///
    /// A unidirectional sequence marks every dot up to the current one
    /// active.
    pub fn progress_dots(&self) -> Vec<ProgressDot> {
        self.slides
            .iter()
            .enumerate()
            .map(|(index, slide)| ProgressDot {
                index,
                active: if self.options.unidirectional {
                    index <= self.current
                } else {
                    index == self.current
                },
                done: self.options.done_state && slide.is_done(),
                clickable: !self.options.unidirectional,
            })
            .collect()
    }

    pub fn done_count(&self) -> usize {
        self.slides.iter().filter(|s| s.is_done()).count()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Integer share of done slides, 0..=100
    pub fn completion_percent(&self) -> u8 {
        (self.done_count() * 100 / self.slides.len()) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.done_count() == self.slides.len()
    }

    /// Mark slide `index` done after its action succeeded.
    ///
    /// Publishes the new percentage, and `SetupComplete` the first time every
    /// slide is done. A slide that was already done publishes nothing.
    pub fn complete_slide(&mut self, index: usize) -> WizardResult<CompletionUpdate> {
        let len = self.slides.len();
        let slide = self
            .slides
            .get_mut(index)
            .ok_or(WizardError::SlideOutOfRange { index, len })?;

        slide.make();
        let newly_done = slide.complete();

        let percent = self.completion_percent();
        if !newly_done {
            return Ok(CompletionUpdate {
                percent,
                setup_complete: false,
            });
        }
        self.bus.publish(CompletionEvent::Progress(percent));

        let setup_complete = percent == 100 && !self.announced;
        if setup_complete {
            self.announced = true;
            self.bus.publish(CompletionEvent::SetupComplete);
        }

        Ok(CompletionUpdate {
            percent,
            setup_complete,
        })
    }

    /// Record a failed action on slide `index`
    pub fn fail_slide(&mut self, index: usize, message: impl Into<String>) -> WizardResult<()> {
        let len = self.slides.len();
        self.slides
            .get_mut(index)
            .ok_or(WizardError::SlideOutOfRange { index, len })?
            .fail(message);
        Ok(())
    }

    /// Listen for completion events
    pub fn subscribe(&mut self) -> Subscription {
        self.bus.subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Slide {
        &mut self.slides[self.current]
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn options(&self) -> SequenceOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldDef;
    use crate::wizard::slide::SlidePhase;

    fn descriptor(name: &str) -> SlideDescriptor {
        SlideDescriptor::new(
            name,
            name,
            "create_items",
            vec![FieldDef::new("item", "Item").required()],
        )
    }

    fn three() -> SlideSequence {
        SlideSequence::new(
            vec![descriptor("A"), descriptor("B"), descriptor("C")],
            SequenceOptions::default(),
        )
        .unwrap()
    }

    fn visible(sequence: &SlideSequence) -> Vec<usize> {
        sequence
            .slides()
            .iter()
            .filter(|s| s.is_visible())
            .map(|s| s.id())
            .collect()
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let err = SlideSequence::new(Vec::new(), SequenceOptions::default()).unwrap_err();
        assert!(matches!(err, WizardError::NoSlides));
    }

    #[test]
    fn test_first_slide_shown_all_rendered() {
        let sequence = three();
        assert_eq!(visible(&sequence), [0]);
        assert!(sequence
            .slides()
            .iter()
            .all(|s| s.phase() == SlidePhase::Active));
        assert!(!sequence.prev_visible());
        assert!(sequence.next_visible());
    }

    #[test]
    fn test_navigation_keeps_one_visible() {
        let mut sequence = three();
        assert!(sequence.next());
        assert!(sequence.next());
        assert_eq!(visible(&sequence), [2]);
        assert!(!sequence.next_visible());
        assert!(!sequence.next());

        assert!(sequence.prev());
        assert_eq!(visible(&sequence), [1]);
        assert_eq!(sequence.current_index(), 1);
    }

    #[test]
    fn test_show_slide_out_of_range() {
        let mut sequence = three();
        let err = sequence.show_slide(3).unwrap_err();
        assert!(matches!(err, WizardError::SlideOutOfRange { index: 3, len: 3 }));
        assert_eq!(visible(&sequence), [0]);
    }

    #[test]
    fn test_unidirectional_dots() {
        let mut sequence = SlideSequence::new(
            vec![descriptor("A"), descriptor("B")],
            SequenceOptions {
                unidirectional: true,
                done_state: true,
            },
        )
        .unwrap();

        assert!(sequence.next());
        assert!(!sequence.click_dot(0).unwrap());
        assert_eq!(sequence.current_index(), 1);

        let dots = sequence.progress_dots();
        assert!(dots.iter().all(|d| !d.clickable));
        assert!(dots.iter().all(|d| d.active));

        assert!(sequence.prev_visible());
        assert!(sequence.prev());
        assert!(sequence.progress_dots()[0].active);
        assert!(!sequence.progress_dots()[1].active);
    }

    #[test]
    fn test_click_dot_shows_target() {
        let mut sequence = three();
        assert!(sequence.click_dot(2).unwrap());
        assert_eq!(visible(&sequence), [2]);
        assert!(sequence.progress_dots()[2].active);
        assert!(!sequence.progress_dots()[0].active);
    }

    #[test]
    fn test_required_title_scenario() {
        let mut descriptors = vec![SlideDescriptor::new(
            "Intro",
            "Intro",
            "create_items",
            vec![FieldDef::new("title", "Title").required()],
        )];
        descriptors.push(descriptor("B"));
        descriptors.push(descriptor("C"));
        let mut sequence = SlideSequence::new(descriptors, SequenceOptions::default()).unwrap();

        assert!(sequence.current_mut().prepare_submit().is_none());
        assert_eq!(sequence.current().phase(), SlidePhase::Active);

        sequence.current_mut().set_value("title", "Welcome").unwrap();
        let request = sequence.current_mut().prepare_submit().unwrap();
        let update = sequence.complete_slide(request.slide).unwrap();

        assert_eq!(update.percent, 33);
        assert_eq!(sequence.slides()[0].phase(), SlidePhase::Done);
        assert_eq!(sequence.slides()[1].phase(), SlidePhase::Active);
        assert_eq!(sequence.slides()[2].phase(), SlidePhase::Active);
    }

    #[test]
    fn test_completion_percent_and_signal() {
        let mut sequence = three();
        let subscription = sequence.subscribe();

        let update = sequence.complete_slide(0).unwrap();
        assert_eq!(update.percent, 33);
        assert!(!update.setup_complete);

        sequence.complete_slide(1).unwrap();
        let update = sequence.complete_slide(2).unwrap();
        assert_eq!(update.percent, 100);
        assert!(update.setup_complete);

        assert_eq!(
            subscription.drain(),
            vec![
                CompletionEvent::Progress(33),
                CompletionEvent::Progress(66),
                CompletionEvent::Progress(100),
                CompletionEvent::SetupComplete,
            ]
        );
    }

    #[test]
    fn test_setup_complete_only_once() {
        let mut sequence = SlideSequence::new(vec![descriptor("A")], SequenceOptions::default()).unwrap();
        let subscription = sequence.subscribe();

        assert!(sequence.complete_slide(0).unwrap().setup_complete);
        assert!(!sequence.complete_slide(0).unwrap().setup_complete);

        let events = subscription.drain();
        let completes = events
            .iter()
            .filter(|e| **e == CompletionEvent::SetupComplete)
            .count();
        assert_eq!(completes, 1);
    }

    #[test]
    fn test_completing_done_slide_is_silent() {
        let mut sequence = three();
        let subscription = sequence.subscribe();

        sequence.complete_slide(1).unwrap();
        let again = sequence.complete_slide(1).unwrap();

        assert_eq!(again.percent, 33);
        assert!(!again.setup_complete);
        assert_eq!(subscription.drain(), vec![CompletionEvent::Progress(33)]);
    }

    #[test]
    fn test_initially_done_slides_count() {
        let mut done = descriptor("A");
        done.done = true;
        let mut sequence = SlideSequence::new(vec![done, descriptor("B")], SequenceOptions::default()).unwrap();

        assert_eq!(sequence.completion_percent(), 50);
        assert!(sequence.progress_dots()[0].done);

        let update = sequence.complete_slide(1).unwrap();
        assert!(update.setup_complete);
    }

    #[test]
    fn test_all_done_at_start_never_announces() {
        let mut done = descriptor("A");
        done.done = true;
        let mut sequence = SlideSequence::new(vec![done], SequenceOptions::default()).unwrap();
        assert!(sequence.is_complete());
        assert!(!sequence.complete_slide(0).unwrap().setup_complete);
    }

    #[test]
    fn test_done_state_hidden_on_dots() {
        let mut sequence = SlideSequence::new(
            vec![descriptor("A"), descriptor("B")],
            SequenceOptions {
                unidirectional: false,
                done_state: false,
            },
        )
        .unwrap();
        sequence.complete_slide(0).unwrap();
        assert!(sequence.progress_dots().iter().all(|d| !d.done));
        assert_eq!(sequence.completion_percent(), 50);
    }

    #[test]
    fn test_fail_slide_keeps_form() {
        let mut sequence = three();
        sequence.fail_slide(0, "no item name was given").unwrap();
        assert_eq!(sequence.current().error(), Some("no item name was given"));
        assert_eq!(sequence.current().phase(), SlidePhase::Active);
        assert!(sequence.fail_slide(7, "x").is_err());
    }
}
