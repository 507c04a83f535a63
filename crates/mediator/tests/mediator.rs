use mediator::{ChatEvent, ChatRoom, ControlTower, DecisionKind, MediatorError, MessageKind};

fn occupied(tower: &ControlTower) -> Vec<(String, String)> {
    tower
        .runways()
        .into_iter()
        .filter_map(|r| r.occupied_by.map(|a| (r.name, a)))
        .collect()
}

#[test]
fn test_four_aircraft_three_runways() {
    let tower = ControlTower::new("Tower", ["09L", "09R", "27L"]);
    let fleet: Vec<_> = ["AA101", "BA202", "LH303", "AF404"]
        .into_iter()
        .map(|c| tower.register(c).unwrap())
        .collect();

    let kinds: Vec<_> = fleet
        .iter()
        .map(|a| a.request_landing().unwrap().kind)
        .collect();

    assert_eq!(
        kinds.iter().filter(|k| **k == DecisionKind::Cleared).count(),
        3
    );
    assert_eq!(kinds[3], DecisionKind::Hold);
    assert!(fleet[3].radio()[0].contains("hold"));
}

#[test]
fn test_takeoff_frees_exactly_one_runway() {
    let tower = ControlTower::new("Tower", ["09L", "09R", "27L"]);
    for call_sign in ["AA101", "BA202", "LH303"] {
        tower.register(call_sign).unwrap().request_landing().unwrap();
    }
    assert_eq!(occupied(&tower).len(), 3);

    let decision = tower.request_takeoff("BA202").unwrap();
    assert_eq!(decision.runway.as_deref(), Some("09R"));
    assert_eq!(
        occupied(&tower),
        vec![
            ("09L".to_string(), "AA101".to_string()),
            ("27L".to_string(), "LH303".to_string()),
        ]
    );

    // freed runway is reassigned to the next arrival
    tower.register("AF404").unwrap();
    let next = tower.request_landing("AF404").unwrap();
    assert_eq!(next.runway.as_deref(), Some("09R"));
}

#[test]
fn test_no_runway_is_ever_double_booked() {
    let tower = ControlTower::new("Tower", ["A", "B"]);
    let calls = ["X1", "X2", "X3"];
    for c in calls {
        tower.register(c).unwrap();
    }

    for round in 0..6 {
        let c = calls[round % calls.len()];
        let _ = tower.request_landing(c).unwrap();
        let _ = tower.request_runway_change(c, if round % 2 == 0 { "A" } else { "B" });
        if round % 3 == 2 {
            let _ = tower.request_takeoff(c).unwrap();
        }

        let holders: Vec<_> = occupied(&tower).into_iter().map(|(_, a)| a).collect();
        let mut unique = holders.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(holders.len(), unique.len());
    }
}

#[test]
fn test_broadcast_never_reaches_sender() {
    let room = ChatRoom::new("general");
    let users: Vec<_> = ["alice", "bob", "carol"]
        .into_iter()
        .map(|u| room.add_user(u).unwrap())
        .collect();

    assert_eq!(users[0].send("hello everyone").unwrap(), 2);

    let got = |i: usize| {
        users[i]
            .inbox()
            .iter()
            .any(|m| m.kind == MessageKind::Broadcast && m.text == "hello everyone")
    };
    assert!(!got(0));
    assert!(got(1));
    assert!(got(2));
}

#[test]
fn test_private_message_reaches_only_receiver() {
    let room = ChatRoom::new("general");
    let alice = room.add_user("alice").unwrap();
    let bob = room.add_user("bob").unwrap();
    let carol = room.add_user("carol").unwrap();

    alice.send_private("carol", "psst").unwrap();

    let private = |u: &mediator::ChatUser| {
        u.inbox()
            .into_iter()
            .filter(|m| m.kind == MessageKind::Private)
            .count()
    };
    assert_eq!(private(&carol), 1);
    assert_eq!(private(&bob), 0);
    assert_eq!(private(&alice), 0);
}

#[test]
fn test_leaving_user_stops_receiving() {
    let room = ChatRoom::new("general");
    let alice = room.add_user("alice").unwrap();
    let bob = room.add_user("bob").unwrap();

    bob.notify(ChatEvent::Leave).unwrap();
    let before = bob.inbox().len();
    assert_eq!(alice.send("still here?").unwrap(), 0);
    assert_eq!(bob.inbox().len(), before);
    assert!(
        room.history()
            .messages()
            .contains(&"bob left the room")
    );
}

#[test]
fn test_participants_outliving_mediators() {
    let user = ChatRoom::new("gone").add_user("alice").unwrap();
    assert_eq!(
        user.notify(ChatEvent::Typing).unwrap_err(),
        MediatorError::MediatorUnavailable
    );

    let aircraft = ControlTower::new("Tower", ["09L"])
        .register("AA101")
        .unwrap();
    assert_eq!(
        aircraft.request_takeoff().unwrap_err(),
        MediatorError::MediatorUnavailable
    );
}
