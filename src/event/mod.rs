//! Events a dialogue reports to its host.

/// Something observable that happened to a dialogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueEvent {
    /// The dialogue box was opened at its first message.
    Started,
    /// Message `index` became the displayed message.
    MessageShown { index: usize },
    /// Message `index` finished revealing, by time or by skip.
    MessageRevealed { index: usize },
    /// The end-of-message prompt changed visibility.
    PromptShown,
    PromptHidden,
    /// Every message was read and the dialogue box was hidden.
    Finished,
    /// The dialogue was stopped before finishing.
    Stopped,
}

/// Event queue for pending events.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<DialogueEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: DialogueEvent) {
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<DialogueEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = EventQueue::new();
        queue.push(DialogueEvent::Started);
        queue.push(DialogueEvent::MessageShown { index: 0 });

        assert_eq!(
            queue.drain(),
            vec![DialogueEvent::Started, DialogueEvent::MessageShown { index: 0 }]
        );
        assert!(queue.is_empty());
    }
}
