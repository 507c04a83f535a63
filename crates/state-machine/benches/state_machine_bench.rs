use criterion::{Criterion, criterion_group, criterion_main};
use state_machine::scenario::{OrderScenario, run_order_demo, sample_items};
use state_machine::{Order, OrderAction, OrderStateMachine, TrafficLight};

fn bench_full_lifecycle(c: &mut Criterion) {
    let machine = OrderStateMachine::new();
    let actions = [
        OrderAction::Process,
        OrderAction::Complete,
        OrderAction::Complete,
    ];

    c.bench_function("state_machine/pending_to_delivered", |b| {
        b.iter(|| {
            let order = Order::new(sample_items());
            machine.run(order, &actions).unwrap()
        });
    });
}

fn bench_order_demo(c: &mut Criterion) {
    let machine = OrderStateMachine::new();

    c.bench_function("state_machine/order_demo_report", |b| {
        b.iter(|| run_order_demo(&machine, OrderScenario::default()).unwrap());
    });
}

fn bench_traffic_light(c: &mut Criterion) {
    c.bench_function("state_machine/traffic_light_1000_advances", |b| {
        b.iter(|| {
            let mut light = TrafficLight::new();
            for _ in 0..1000 {
                light.advance();
            }
            light.current()
        });
    });
}

criterion_group!(
    benches,
    bench_full_lifecycle,
    bench_order_demo,
    bench_traffic_light
);
criterion_main!(benches);
