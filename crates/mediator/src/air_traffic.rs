//! Air traffic control tower mediator.
//!
//! The tower owns a fixed pool of runways. Aircraft never see each other;
//! they ask the tower and get a [`TowerDecision`] back. Contention is
//! expected, so a hold or a denial is a decision, not an error.

use std::sync::{Arc, RwLock, Weak};

use common::ActivityLog;
use serde::{Deserialize, Serialize};

use crate::Mediator;
use crate::error::{MediatorError, Result};
use crate::lock;

/// What an aircraft asks the tower for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "request", rename_all = "snake_case")]
pub enum TowerRequest {
    Landing,
    Takeoff,
    RunwayChange { runway: String },
}

impl TowerRequest {
    pub fn as_str(&self) -> &'static str {
        match self {
            TowerRequest::Landing => "landing",
            TowerRequest::Takeoff => "takeoff",
            TowerRequest::RunwayChange { .. } => "runway_change",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    Cleared,
    /// No runway free; try again later.
    Hold,
    Denied,
}

impl DecisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionKind::Cleared => "cleared",
            DecisionKind::Hold => "hold",
            DecisionKind::Denied => "denied",
        }
    }
}

/// The tower's answer to a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerDecision {
    pub call_sign: String,
    pub request: TowerRequest,
    pub kind: DecisionKind,
    /// Runway involved in the decision, if any.
    pub runway: Option<String>,
    pub message: String,
}

impl TowerDecision {
    pub fn is_cleared(&self) -> bool {
        self.kind == DecisionKind::Cleared
    }
}

/// A named runway, free or occupied by one aircraft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runway {
    pub name: String,
    pub occupied_by: Option<String>,
}

impl Runway {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            occupied_by: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.occupied_by.is_none()
    }
}

#[derive(Debug)]
struct TowerState {
    runways: Vec<Runway>,
    aircraft: Vec<Arc<Aircraft>>,
    log: ActivityLog,
}

impl TowerState {
    fn require(&self, call_sign: &str) -> Result<&Arc<Aircraft>> {
        self.aircraft
            .iter()
            .find(|a| a.call_sign == call_sign)
            .ok_or_else(|| MediatorError::UnknownParticipant {
                name: call_sign.to_string(),
            })
    }

    fn runway_of(&self, call_sign: &str) -> Option<usize> {
        self.runways
            .iter()
            .position(|r| r.occupied_by.as_deref() == Some(call_sign))
    }

    fn landing(&mut self, call_sign: &str) -> (DecisionKind, Option<String>, String) {
        if let Some(held) = self.runway_of(call_sign) {
            let name = self.runways[held].name.clone();
            let message = format!("landing denied, already assigned to runway {name}");
            return (DecisionKind::Denied, Some(name), message);
        }

        match self.runways.iter_mut().find(|r| r.is_free()) {
            Some(runway) => {
                runway.occupied_by = Some(call_sign.to_string());
                let message = format!("cleared to land on runway {}", runway.name);
                (DecisionKind::Cleared, Some(runway.name.clone()), message)
            }
            None => (
                DecisionKind::Hold,
                None,
                "no runway available, hold position".to_string(),
            ),
        }
    }

    fn takeoff(&mut self, call_sign: &str) -> (DecisionKind, Option<String>, String) {
        match self.runway_of(call_sign) {
            Some(held) => {
                let runway = &mut self.runways[held];
                runway.occupied_by = None;
                let message = format!("cleared for takeoff from runway {}", runway.name);
                (DecisionKind::Cleared, Some(runway.name.clone()), message)
            }
            None => (
                DecisionKind::Denied,
                None,
                "takeoff denied, no runway assigned".to_string(),
            ),
        }
    }

    fn runway_change(
        &mut self,
        call_sign: &str,
        target: &str,
    ) -> (DecisionKind, Option<String>, String) {
        let Some(target_index) = self.runways.iter().position(|r| r.name == target) else {
            return (
                DecisionKind::Denied,
                Some(target.to_string()),
                format!("runway change denied, no runway named {target}"),
            );
        };

        if let Some(holder) = self.runways[target_index].occupied_by.as_deref() {
            let message = if holder == call_sign {
                format!("runway change denied, already on runway {target}")
            } else {
                format!("runway change denied, runway {target} is occupied")
            };
            return (DecisionKind::Denied, Some(target.to_string()), message);
        }

        let previous = self.runway_of(call_sign).map(|held| {
            self.runways[held].occupied_by = None;
            self.runways[held].name.clone()
        });
        self.runways[target_index].occupied_by = Some(call_sign.to_string());

        let message = match previous {
            Some(from) => format!("cleared to move from runway {from} to runway {target}"),
            None => format!("cleared to use runway {target}"),
        };
        (DecisionKind::Cleared, Some(target.to_string()), message)
    }
}

#[derive(Debug)]
struct TowerInner {
    name: String,
    state: RwLock<TowerState>,
}

/// Coordinates runway use between registered aircraft.
#[derive(Debug, Clone)]
pub struct ControlTower {
    inner: Arc<TowerInner>,
}

impl ControlTower {
    /// Creates a tower with every runway free.
    pub fn new<I, S>(name: impl Into<String>, runways: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Arc::new(TowerInner {
                name: name.into(),
                state: RwLock::new(TowerState {
                    runways: runways.into_iter().map(Runway::new).collect(),
                    aircraft: Vec::new(),
                    log: ActivityLog::new(),
                }),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Puts an aircraft on the tower frequency.
    pub fn register(&self, call_sign: impl Into<String>) -> Result<Arc<Aircraft>> {
        let call_sign = call_sign.into();
        let mut state = lock::write(&self.inner.state);
        if state.aircraft.iter().any(|a| a.call_sign == call_sign) {
            return Err(MediatorError::DuplicateParticipant { name: call_sign });
        }

        let aircraft = Arc::new(Aircraft {
            call_sign: call_sign.clone(),
            tower: Arc::downgrade(&self.inner),
            radio: RwLock::new(Vec::new()),
        });
        state.aircraft.push(aircraft.clone());
        state.log.record(format!("{call_sign} on frequency"));

        tracing::debug!(tower = %self.inner.name, call_sign = %call_sign, "aircraft registered");
        Ok(aircraft)
    }

    /// Looks up a registered aircraft.
    pub fn aircraft(&self, call_sign: &str) -> Option<Arc<Aircraft>> {
        lock::read(&self.inner.state)
            .aircraft
            .iter()
            .find(|a| a.call_sign == call_sign)
            .cloned()
    }

    /// Registered call signs in registration order.
    pub fn call_signs(&self) -> Vec<String> {
        lock::read(&self.inner.state)
            .aircraft
            .iter()
            .map(|a| a.call_sign.clone())
            .collect()
    }

    /// Assigns the first free runway, or tells the aircraft to hold.
    pub fn request_landing(&self, call_sign: &str) -> Result<TowerDecision> {
        self.decide(call_sign, TowerRequest::Landing)
    }

    /// Frees the runway the aircraft holds.
    pub fn request_takeoff(&self, call_sign: &str) -> Result<TowerDecision> {
        self.decide(call_sign, TowerRequest::Takeoff)
    }

    /// Moves the aircraft to `runway` if it is free.
    pub fn request_runway_change(&self, call_sign: &str, runway: &str) -> Result<TowerDecision> {
        self.decide(
            call_sign,
            TowerRequest::RunwayChange {
                runway: runway.to_string(),
            },
        )
    }

    /// Snapshot of runway occupancy.
    pub fn runways(&self) -> Vec<Runway> {
        lock::read(&self.inner.state).runways.clone()
    }

    /// Snapshot of the communications log.
    pub fn log(&self) -> ActivityLog {
        lock::read(&self.inner.state).log.clone()
    }

    fn decide(&self, call_sign: &str, request: TowerRequest) -> Result<TowerDecision> {
        let mut state = lock::write(&self.inner.state);
        let aircraft = state.require(call_sign)?.clone();

        let (kind, runway, message) = match &request {
            TowerRequest::Landing => state.landing(call_sign),
            TowerRequest::Takeoff => state.takeoff(call_sign),
            TowerRequest::RunwayChange { runway } => state.runway_change(call_sign, runway),
        };

        state.log.record(format!(
            "{call_sign} requested {}: {message}",
            request.as_str()
        ));
        aircraft.receive(format!("{}: {message}", self.inner.name));

        tracing::debug!(
            tower = %self.inner.name,
            call_sign,
            request = request.as_str(),
            decision = kind.as_str(),
            "tower decision"
        );
        metrics::counter!(
            "runway_requests_total",
            "request" => request.as_str(),
            "outcome" => kind.as_str()
        )
        .increment(1);

        Ok(TowerDecision {
            call_sign: call_sign.to_string(),
            request,
            kind,
            runway,
            message,
        })
    }
}

impl Mediator for ControlTower {
    type Event = TowerRequest;
    type Outcome = TowerDecision;

    fn notify(&self, sender: &str, event: TowerRequest) -> Result<TowerDecision> {
        self.decide(sender, event)
    }
}

/// An aircraft under tower control.
#[derive(Debug)]
pub struct Aircraft {
    call_sign: String,
    tower: Weak<TowerInner>,
    radio: RwLock<Vec<String>>,
}

impl Aircraft {
    pub fn call_sign(&self) -> &str {
        &self.call_sign
    }

    pub fn request_landing(&self) -> Result<TowerDecision> {
        self.tower()?.request_landing(&self.call_sign)
    }

    pub fn request_takeoff(&self) -> Result<TowerDecision> {
        self.tower()?.request_takeoff(&self.call_sign)
    }

    pub fn request_runway_change(&self, runway: &str) -> Result<TowerDecision> {
        self.tower()?.request_runway_change(&self.call_sign, runway)
    }

    /// Instructions received from the tower, oldest first.
    pub fn radio(&self) -> Vec<String> {
        lock::read(&self.radio).clone()
    }

    fn tower(&self) -> Result<ControlTower> {
        self.tower
            .upgrade()
            .map(|inner| ControlTower { inner })
            .ok_or(MediatorError::MediatorUnavailable)
    }

    fn receive(&self, instruction: String) {
        lock::write(&self.radio).push(instruction);
    }
}
