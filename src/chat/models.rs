//! The core models for keeping a running chat transcript.
use crate::openai::Message;

#[derive(Default, Debug)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn messages(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::Role;

    #[test]
    fn it_keeps_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::new(Role::User, "one"));
        transcript.push(Message::new(Role::Assistant, "two"));
        transcript.push(Message::new(Role::User, "three"));

        let contents: Vec<String> = transcript.messages().into_iter().map(|m| m.content).collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn it_copies_messages_out() {
        let mut transcript = Transcript::new();
        transcript.push(Message::new(Role::User, "Gotham"));
        let mut copy = transcript.messages();
        copy.push(Message::new(Role::Assistant, "Welcome back."));

        assert_eq!(transcript.len(), 1);
        assert_eq!(copy.len(), 2);
    }
}
