use std::time::Duration;

/// Delay between two revealed characters of the hero headline.
pub const TYPING_INTERVAL: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Typing(usize),
    Done,
}

/// Outcome of a single timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A character was revealed and more remain; keep the timer running.
    Advanced,
    /// Nothing is left to reveal; the timer must be cancelled.
    Finished,
}

/// Reveals a fixed source string one character per tick.
///
/// The displayed text is always a prefix of the source and only grows until
/// it equals the source. Only [`Typewriter::reset`] starts over.
#[derive(Debug, Clone)]
pub struct Typewriter {
    source: String,
    // end byte offset of each char
    boundaries: Vec<usize>,
    position: usize,
}

impl Typewriter {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let boundaries = source
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self {
            source,
            boundaries,
            position: 0,
        }
    }

    pub fn reset(&mut self, source: impl Into<String>) {
        *self = Self::new(source);
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn phase(&self) -> Phase {
        if self.position >= self.len() {
            Phase::Done
        } else if self.position == 0 {
            Phase::Idle
        } else {
            Phase::Typing(self.position)
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase() == Phase::Done
    }

    pub fn displayed(&self) -> &str {
        match self.position {
            0 => "",
            n => &self.source[..self.boundaries[n - 1]],
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.is_done() {
            return Tick::Finished;
        }
        self.position += 1;
        if self.is_done() {
            Tick::Finished
        } else {
            Tick::Advanced
        }
    }
}

/// A scheduled task that can be stopped.
pub trait Cancel {
    fn cancel(self);
}

/// Owns at most one live timer handle and cancels it deterministically.
///
/// Arming replaces (and cancels) the previous handle; dropping the slot
/// cancels whatever is still armed, so a timer never outlives its owner.
#[derive(Debug)]
pub struct TimerSlot<H: Cancel> {
    active: Option<H>,
}

impl<H: Cancel> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<H: Cancel> TimerSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, handle: H) {
        self.disarm();
        self.active = Some(handle);
    }

    /// Cancels the armed handle. Returns false when nothing was armed.
    pub fn disarm(&mut self) -> bool {
        match self.active.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.active.is_some()
    }
}

impl<H: Cancel> Drop for TimerSlot<H> {
    fn drop(&mut self) {
        self.disarm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingHandle(Rc<Cell<u32>>);

    impl Cancel for CountingHandle {
        fn cancel(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    /// Drives a typewriter the way the interval callback does.
    fn run(tw: &mut Typewriter, slot: &mut TimerSlot<CountingHandle>, ticks: usize) {
        for _ in 0..ticks {
            if !slot.is_armed() {
                break;
            }
            if tw.tick() == Tick::Finished {
                slot.disarm();
            }
        }
    }

    #[test]
    fn test_prefix_after_each_tick() {
        let source = "Hello, world";
        let mut tw = Typewriter::new(source);
        assert_eq!(tw.phase(), Phase::Idle);
        assert_eq!(tw.displayed(), "");

        for k in 1..=source.len() {
            tw.tick();
            assert_eq!(tw.displayed(), &source[..k]);
        }
        assert_eq!(tw.phase(), Phase::Done);
    }

    #[test]
    fn test_done_is_terminal() {
        let mut tw = Typewriter::new("abc");
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.displayed(), "abc");

        for _ in 0..10 {
            assert_eq!(tw.tick(), Tick::Finished);
            assert_eq!(tw.displayed(), "abc");
        }
    }

    #[test]
    fn test_hi_in_two_ticks() {
        let cancels = Rc::new(Cell::new(0));
        let mut tw = Typewriter::new("Hi");
        let mut slot = TimerSlot::new();
        slot.arm(CountingHandle(cancels.clone()));

        assert_eq!(tw.tick(), Tick::Advanced);
        assert_eq!(tw.phase(), Phase::Typing(1));
        assert_eq!(tw.tick(), Tick::Finished);
        slot.disarm();

        assert_eq!(tw.displayed(), "Hi");
        assert!(!slot.is_armed());
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn test_empty_source_is_done_immediately() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_done());
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.tick(), Tick::Finished);
        assert_eq!(tw.displayed(), "");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::new("I’m é");
        assert_eq!(tw.len(), 5);
        tw.tick();
        tw.tick();
        assert_eq!(tw.displayed(), "I’");
        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.displayed(), "I’m é");
    }

    #[test]
    fn test_reset_starts_over() {
        let mut tw = Typewriter::new("first");
        tw.tick();
        tw.tick();
        tw.reset("second");
        assert_eq!(tw.phase(), Phase::Idle);
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.source(), "second");
        tw.tick();
        assert_eq!(tw.displayed(), "s");
    }

    #[test]
    fn test_timer_cancelled_once_on_completion() {
        let cancels = Rc::new(Cell::new(0));
        let mut tw = Typewriter::new("abcd");
        let mut slot = TimerSlot::new();
        slot.arm(CountingHandle(cancels.clone()));

        run(&mut tw, &mut slot, 20);
        assert_eq!(tw.displayed(), "abcd");
        assert_eq!(cancels.get(), 1);

        // teardown after completion has nothing left to cancel
        drop(slot);
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn test_timer_cancelled_on_teardown() {
        let cancels = Rc::new(Cell::new(0));
        let mut tw = Typewriter::new("abcdef");
        let mut slot = TimerSlot::new();
        slot.arm(CountingHandle(cancels.clone()));

        run(&mut tw, &mut slot, 2);
        assert_eq!(tw.displayed(), "ab");
        assert_eq!(cancels.get(), 0);

        drop(slot);
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn test_rearm_cancels_previous() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::new();

        slot.arm(CountingHandle(first.clone()));
        slot.arm(CountingHandle(second.clone()));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);

        assert!(slot.disarm());
        assert!(!slot.disarm());
        assert_eq!(second.get(), 1);
    }
}
