use super::trigger::{ElementBounds, ScrollRange, TriggerPosition};
use smallvec::SmallVec;

/// One-way visibility state of a marked element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

#[derive(Clone, Debug)]
pub struct RevealTrigger {
    pub range: ScrollRange,
    state: RevealState,
}

impl RevealTrigger {
    pub fn new(range: ScrollRange) -> Self {
        Self {
            range,
            state: RevealState::Pending,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Returns true on the single Pending -> Revealed transition.
    pub fn update(&mut self, scroll: f64) -> bool {
        match self.state {
            RevealState::Revealed => false,
            RevealState::Pending if scroll >= self.range.start => {
                self.state = RevealState::Revealed;
                true
            }
            RevealState::Pending => false,
        }
    }
}

/// Reveal triggers for every marked element, all sharing one start/end rule.
#[derive(Clone, Debug)]
pub struct RevealSet {
    start: TriggerPosition,
    end: TriggerPosition,
    triggers: Vec<RevealTrigger>,
}

impl RevealSet {
    pub fn new(start: &str, end: &str) -> anyhow::Result<Self> {
        Ok(Self {
            start: TriggerPosition::parse(start)?,
            end: TriggerPosition::parse(end)?,
            triggers: Vec::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn triggers(&self) -> &[RevealTrigger] {
        &self.triggers
    }

    pub fn revealed_count(&self) -> usize {
        self.triggers.iter().filter(|t| t.is_revealed()).count()
    }

    /// Recompute ranges from fresh layout. Existing states are kept by index;
    /// new elements start pending, dropped ones are forgotten.
    pub fn refresh(&mut self, bounds: &[ElementBounds], viewport_height: f64) {
        self.triggers.truncate(bounds.len());
        for (i, b) in bounds.iter().enumerate() {
            let range = ScrollRange::resolve(&self.start, &self.end, *b, viewport_height);
            match self.triggers.get_mut(i) {
                Some(t) => t.range = range,
                None => self.triggers.push(RevealTrigger::new(range)),
            }
        }
    }

    /// Indices that became revealed at this scroll offset.
    pub fn update(&mut self, scroll: f64) -> SmallVec<[usize; 8]> {
        let mut fired = SmallVec::new();
        for (i, t) in self.triggers.iter_mut().enumerate() {
            if t.update(scroll) {
                fired.push(i);
            }
        }
        fired
    }
}
