//! Scripted demonstrations for the chat room and the control tower.

use std::collections::BTreeMap;
use std::sync::Arc;

use common::DemoReport;
use serde::{Deserialize, Serialize};

use crate::air_traffic::{Aircraft, ControlTower, Runway, TowerDecision};
use crate::chat::{ChatEvent, ChatRoom, ChatUser, InboxMessage};
use crate::error::{MediatorError, Result};

pub const PATTERN: &str = "Mediator";

pub const DEFAULT_ROOM: &str = "general";
pub const DEFAULT_TOWER: &str = "Tower";
pub const DEFAULT_RUNWAYS: [&str; 3] = ["09L", "09R", "27L"];

/// One scripted chat action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ChatStep {
    Join { user: String },
    Send { user: String, text: String },
    Private { user: String, to: String, text: String },
    /// `event` is `typing` or `leave`.
    Notify { user: String, event: String },
}

/// One scripted tower request. Aircraft are registered on first mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TowerStep {
    Land { aircraft: String },
    Takeoff { aircraft: String },
    ChangeRunway { aircraft: String, runway: String },
}

impl TowerStep {
    fn aircraft(&self) -> &str {
        match self {
            TowerStep::Land { aircraft }
            | TowerStep::Takeoff { aircraft }
            | TowerStep::ChangeRunway { aircraft, .. } => aircraft,
        }
    }
}

fn join(user: &str) -> ChatStep {
    ChatStep::Join {
        user: user.to_string(),
    }
}

fn send(user: &str, text: &str) -> ChatStep {
    ChatStep::Send {
        user: user.to_string(),
        text: text.to_string(),
    }
}

pub fn default_chat_script() -> Vec<ChatStep> {
    vec![
        join("alice"),
        join("bob"),
        join("carol"),
        send("alice", "Morning all, standup in five?"),
        ChatStep::Private {
            user: "bob".to_string(),
            to: "alice".to_string(),
            text: "Running late, start without me".to_string(),
        },
        ChatStep::Notify {
            user: "carol".to_string(),
            event: "typing".to_string(),
        },
        send("carol", "Sounds good"),
        ChatStep::Notify {
            user: "bob".to_string(),
            event: "leave".to_string(),
        },
        send("alice", "Notes will be in the channel"),
    ]
}

pub fn default_tower_script() -> Vec<TowerStep> {
    let land = |a: &str| TowerStep::Land {
        aircraft: a.to_string(),
    };
    vec![
        land("AA101"),
        land("BA202"),
        land("LH303"),
        land("AF404"),
        TowerStep::Takeoff {
            aircraft: "BA202".to_string(),
        },
        TowerStep::ChangeRunway {
            aircraft: "LH303".to_string(),
            runway: "09R".to_string(),
        },
        land("AF404"),
        TowerStep::Takeoff {
            aircraft: "UA505".to_string(),
        },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatDemoResult {
    pub room: String,
    pub members: Vec<String>,
    pub history: Vec<String>,
    /// Every user who ever joined, including those who left. A user who
    /// re-joined keeps what arrived before leaving, oldest first.
    pub inboxes: BTreeMap<String, Vec<InboxMessage>>,
}

/// Plays `script` against a fresh room.
pub fn run_chat_demo(
    room: Option<String>,
    script: Vec<ChatStep>,
) -> Result<DemoReport<ChatDemoResult>> {
    let room = ChatRoom::new(room.unwrap_or_else(|| DEFAULT_ROOM.to_string()));
    let script = if script.is_empty() {
        default_chat_script()
    } else {
        script
    };

    let mut users: BTreeMap<String, Arc<ChatUser>> = BTreeMap::new();
    let mut earlier: BTreeMap<String, Vec<InboxMessage>> = BTreeMap::new();
    let mut steps = Vec::with_capacity(script.len());

    for step in script {
        let line = match step {
            ChatStep::Join { user } => {
                let handle = room.add_user(user.as_str())?;
                if let Some(previous) = users.insert(user.clone(), handle) {
                    earlier
                        .entry(user.clone())
                        .or_default()
                        .extend(previous.inbox());
                }
                format!("{user} joined {}", room.name())
            }
            ChatStep::Send { user, text } => {
                let delivered = participant(&users, &user)?.send(&text)?;
                format!("{user} broadcast \"{text}\" to {delivered} member(s)")
            }
            ChatStep::Private { user, to, text } => {
                participant(&users, &user)?.send_private(&to, &text)?;
                format!("{user} sent a private message to {to}")
            }
            ChatStep::Notify { user, event } => {
                let event: ChatEvent = event.parse()?;
                let notified = participant(&users, &user)?.notify(event)?;
                match event {
                    ChatEvent::Typing => format!("{user} is typing ({notified} notified)"),
                    ChatEvent::Leave => format!("{user} left ({notified} notified)"),
                }
            }
        };
        steps.push(line);
    }

    let result = ChatDemoResult {
        room: room.name().to_string(),
        members: room.members(),
        history: room.history().rendered(),
        inboxes: users
            .iter()
            .map(|(name, user)| {
                let mut inbox = earlier.remove(name).unwrap_or_default();
                inbox.extend(user.inbox());
                (name.clone(), inbox)
            })
            .collect(),
    };
    Ok(DemoReport::new(PATTERN, "chat room", result).with_steps(steps))
}

fn participant<'a>(
    users: &'a BTreeMap<String, Arc<ChatUser>>,
    name: &str,
) -> Result<&'a Arc<ChatUser>> {
    users
        .get(name)
        .ok_or_else(|| MediatorError::UnknownParticipant {
            name: name.to_string(),
        })
}

#[derive(Debug, Clone, Serialize)]
pub struct TowerDemoResult {
    pub tower: String,
    pub runways: Vec<Runway>,
    pub decisions: Vec<TowerDecision>,
    pub log: Vec<String>,
    pub radio: BTreeMap<String, Vec<String>>,
}

/// Plays `script` against a fresh tower with the given runways.
pub fn run_tower_demo(
    runways: Vec<String>,
    script: Vec<TowerStep>,
) -> Result<DemoReport<TowerDemoResult>> {
    let tower = if runways.is_empty() {
        ControlTower::new(DEFAULT_TOWER, DEFAULT_RUNWAYS)
    } else {
        ControlTower::new(DEFAULT_TOWER, runways)
    };
    let script = if script.is_empty() {
        default_tower_script()
    } else {
        script
    };

    let mut fleet: BTreeMap<String, Arc<Aircraft>> = BTreeMap::new();
    let mut decisions = Vec::with_capacity(script.len());

    for step in script {
        let call_sign = step.aircraft().to_string();
        let aircraft = match fleet.get(&call_sign) {
            Some(aircraft) => aircraft.clone(),
            None => {
                let aircraft = tower.register(call_sign.as_str())?;
                fleet.insert(call_sign, aircraft.clone());
                aircraft
            }
        };

        let decision = match &step {
            TowerStep::Land { .. } => aircraft.request_landing()?,
            TowerStep::Takeoff { .. } => aircraft.request_takeoff()?,
            TowerStep::ChangeRunway { runway, .. } => aircraft.request_runway_change(runway)?,
        };
        decisions.push(decision);
    }

    let steps = decisions
        .iter()
        .map(|d| format!("{} [{}] {}", d.call_sign, d.kind.as_str(), d.message))
        .collect();
    let result = TowerDemoResult {
        tower: tower.name().to_string(),
        runways: tower.runways(),
        decisions,
        log: tower.log().rendered(),
        radio: fleet
            .iter()
            .map(|(call_sign, aircraft)| (call_sign.clone(), aircraft.radio()))
            .collect(),
    };
    Ok(DemoReport::new(PATTERN, "air traffic control", result).with_steps(steps))
}
