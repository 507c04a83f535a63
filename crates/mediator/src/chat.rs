//! Chat room mediator.

use std::sync::{Arc, RwLock, Weak};

use chrono::{DateTime, Utc};
use common::ActivityLog;
use serde::{Deserialize, Serialize};

use crate::Mediator;
use crate::error::{MediatorError, Result};
use crate::lock;

/// Side-channel events a user can raise without message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatEvent {
    /// Shown to others, not recorded in history.
    Typing,
    /// Removes the user from the room.
    Leave,
}

impl std::str::FromStr for ChatEvent {
    type Err = MediatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "typing" => Ok(ChatEvent::Typing),
            "leave" => Ok(ChatEvent::Leave),
            _ => Err(MediatorError::UnknownEvent {
                event: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Broadcast,
    Private,
    Notice,
}

impl MessageKind {
    fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Broadcast => "broadcast",
            MessageKind::Private => "private",
            MessageKind::Notice => "notice",
        }
    }
}

/// A message as it landed in a user's inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxMessage {
    pub from: String,
    pub text: String,
    pub kind: MessageKind,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct RoomState {
    members: Vec<Arc<ChatUser>>,
    history: ActivityLog,
}

impl RoomState {
    fn position(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|m| m.name == name)
    }

    fn require(&self, name: &str) -> Result<&Arc<ChatUser>> {
        self.members
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| MediatorError::UnknownParticipant {
                name: name.to_string(),
            })
    }

    /// Delivers to every member except `sender`; returns the recipient count.
    fn deliver_to_others(&self, sender: &str, text: &str, kind: MessageKind) -> usize {
        let mut delivered = 0;
        for member in self.members.iter().filter(|m| m.name != sender) {
            member.receive(sender, text, kind);
            delivered += 1;
        }
        metrics::counter!("chat_messages_total", "kind" => kind.as_str()).increment(1);
        delivered
    }
}

#[derive(Debug)]
struct RoomInner {
    name: String,
    state: RwLock<RoomState>,
}

/// The coordinator every chat user talks through.
///
/// Cloning yields another handle to the same room.
#[derive(Debug, Clone)]
pub struct ChatRoom {
    inner: Arc<RoomInner>,
}

impl ChatRoom {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RoomInner {
                name: name.into(),
                state: RwLock::new(RoomState::default()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Registers a user and announces them to everyone already present.
    pub fn add_user(&self, name: impl Into<String>) -> Result<Arc<ChatUser>> {
        let name = name.into();
        let mut state = lock::write(&self.inner.state);
        if state.position(&name).is_some() {
            return Err(MediatorError::DuplicateParticipant { name });
        }

        let user = Arc::new(ChatUser {
            name: name.clone(),
            room: Arc::downgrade(&self.inner),
            inbox: RwLock::new(Vec::new()),
        });

        let notice = format!("{name} joined the room");
        state.deliver_to_others(&name, &notice, MessageKind::Notice);
        state.history.record(notice);
        state.members.push(user.clone());

        tracing::debug!(room = %self.inner.name, user = %name, "user joined");
        Ok(user)
    }

    /// Broadcasts `text` to every member but the sender.
    pub fn send_message(&self, text: &str, sender: &str) -> Result<usize> {
        if text.trim().is_empty() {
            return Err(MediatorError::EmptyMessage);
        }

        let mut state = lock::write(&self.inner.state);
        state.require(sender)?;
        state.history.record(format!("{sender}: {text}"));
        Ok(state.deliver_to_others(sender, text, MessageKind::Broadcast))
    }

    /// Delivers `text` to `receiver` only.
    ///
    /// History records that the exchange happened but not its content.
    pub fn send_private_message(&self, text: &str, sender: &str, receiver: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(MediatorError::EmptyMessage);
        }

        let mut state = lock::write(&self.inner.state);
        state.require(sender)?;
        state.require(receiver)?.receive(sender, text, MessageKind::Private);
        state
            .history
            .record(format!("{sender} sent a private message to {receiver}"));
        metrics::counter!("chat_messages_total", "kind" => MessageKind::Private.as_str())
            .increment(1);
        Ok(())
    }

    /// Names of the current members, in join order.
    pub fn members(&self) -> Vec<String> {
        lock::read(&self.inner.state)
            .members
            .iter()
            .map(|m| m.name.clone())
            .collect()
    }

    /// Snapshot of the room history.
    pub fn history(&self) -> ActivityLog {
        lock::read(&self.inner.state).history.clone()
    }
}

impl Mediator for ChatRoom {
    type Event = ChatEvent;
    type Outcome = usize;

    /// Returns how many members were told about the event.
    fn notify(&self, sender: &str, event: ChatEvent) -> Result<usize> {
        let mut state = lock::write(&self.inner.state);
        let index = state
            .position(sender)
            .ok_or_else(|| MediatorError::UnknownParticipant {
                name: sender.to_string(),
            })?;

        match event {
            ChatEvent::Typing => Ok(state.deliver_to_others(
                sender,
                &format!("{sender} is typing..."),
                MessageKind::Notice,
            )),
            ChatEvent::Leave => {
                state.members.remove(index);
                let notice = format!("{sender} left the room");
                state.history.record(notice.clone());
                tracing::debug!(room = %self.inner.name, user = %sender, "user left");
                Ok(state.deliver_to_others(sender, &notice, MessageKind::Notice))
            }
        }
    }
}

/// A chat participant.
///
/// Holds only a weak reference to its room; dropping the room leaves the
/// user able to read its inbox but not to send.
#[derive(Debug)]
pub struct ChatUser {
    name: String,
    room: Weak<RoomInner>,
    inbox: RwLock<Vec<InboxMessage>>,
}

impl ChatUser {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn send(&self, text: &str) -> Result<usize> {
        self.room()?.send_message(text, &self.name)
    }

    pub fn send_private(&self, to: &str, text: &str) -> Result<()> {
        self.room()?.send_private_message(text, &self.name, to)
    }

    pub fn notify(&self, event: ChatEvent) -> Result<usize> {
        self.room()?.notify(&self.name, event)
    }

    pub fn leave(&self) -> Result<usize> {
        self.notify(ChatEvent::Leave)
    }

    /// Everything this user has received, oldest first.
    pub fn inbox(&self) -> Vec<InboxMessage> {
        lock::read(&self.inbox).clone()
    }

    fn room(&self) -> Result<ChatRoom> {
        self.room
            .upgrade()
            .map(|inner| ChatRoom { inner })
            .ok_or(MediatorError::MediatorUnavailable)
    }

    fn receive(&self, from: &str, text: &str, kind: MessageKind) {
        lock::write(&self.inbox).push(InboxMessage {
            from: from.to_string(),
            text: text.to_string(),
            kind,
            received_at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(user: &ChatUser) -> Vec<String> {
        user.inbox().into_iter().map(|m| m.text).collect()
    }

    #[test]
    fn test_join_notice_goes_to_existing_members_only() {
        let room = ChatRoom::new("lobby");
        let alice = room.add_user("alice").unwrap();
        let bob = room.add_user("bob").unwrap();

        assert_eq!(texts(&alice), vec!["bob joined the room"]);
        assert!(bob.inbox().is_empty());
        assert_eq!(room.members(), vec!["alice", "bob"]);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let room = ChatRoom::new("lobby");
        room.add_user("alice").unwrap();
        assert_eq!(
            room.add_user("alice").unwrap_err(),
            MediatorError::DuplicateParticipant {
                name: "alice".to_string()
            }
        );
    }

    #[test]
    fn test_broadcast_skips_sender() {
        let room = ChatRoom::new("lobby");
        let alice = room.add_user("alice").unwrap();
        let bob = room.add_user("bob").unwrap();

        assert_eq!(alice.send("hello").unwrap(), 1);
        assert_eq!(texts(&bob), vec!["hello"]);
        assert!(!texts(&alice).contains(&"hello".to_string()));
    }

    #[test]
    fn test_private_history_omits_body() {
        let room = ChatRoom::new("lobby");
        let alice = room.add_user("alice").unwrap();
        room.add_user("bob").unwrap();

        alice.send_private("bob", "the secret is 42").unwrap();
        let history = room.history();
        let last = history.messages().last().copied().unwrap();
        assert_eq!(last, "alice sent a private message to bob");
        assert!(history.messages().iter().all(|m| !m.contains("42")));
    }

    #[test]
    fn test_private_to_unknown_receiver() {
        let room = ChatRoom::new("lobby");
        let alice = room.add_user("alice").unwrap();
        assert_eq!(
            alice.send_private("zed", "hi").unwrap_err(),
            MediatorError::UnknownParticipant {
                name: "zed".to_string()
            }
        );
    }

    #[test]
    fn test_typing_is_delivered_but_not_recorded() {
        let room = ChatRoom::new("lobby");
        let alice = room.add_user("alice").unwrap();
        let bob = room.add_user("bob").unwrap();
        let before = room.history().len();

        assert_eq!(alice.notify(ChatEvent::Typing).unwrap(), 1);
        assert_eq!(texts(&bob), vec!["alice is typing..."]);
        assert_eq!(room.history().len(), before);
    }

    #[test]
    fn test_leave_removes_member_and_blocks_sending() {
        let room = ChatRoom::new("lobby");
        let alice = room.add_user("alice").unwrap();
        let bob = room.add_user("bob").unwrap();

        assert_eq!(bob.leave().unwrap(), 1);
        assert_eq!(room.members(), vec!["alice"]);
        assert!(texts(&alice).contains(&"bob left the room".to_string()));
        assert_eq!(
            bob.send("anyone?").unwrap_err(),
            MediatorError::UnknownParticipant {
                name: "bob".to_string()
            }
        );
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let room = ChatRoom::new("lobby");
        let alice = room.add_user("alice").unwrap();
        assert_eq!(alice.send("   ").unwrap_err(), MediatorError::EmptyMessage);
    }

    #[test]
    fn test_user_outliving_room() {
        let alice = {
            let room = ChatRoom::new("temporary");
            room.add_user("alice").unwrap()
        };
        assert_eq!(
            alice.send("hello?").unwrap_err(),
            MediatorError::MediatorUnavailable
        );
    }

    #[test]
    fn test_parse_events() {
        assert_eq!("typing".parse::<ChatEvent>(), Ok(ChatEvent::Typing));
        assert_eq!("LEAVE".parse::<ChatEvent>(), Ok(ChatEvent::Leave));
        assert!(matches!(
            "wave".parse::<ChatEvent>(),
            Err(MediatorError::UnknownEvent { .. })
        ));
    }
}
