use criterion::{Criterion, criterion_group, criterion_main};
use handler_chain::{ExpenseRequest, SupportTicket, expense_chain, support_chain};

fn bench_support_chain(c: &mut Criterion) {
    let chain = support_chain();
    let first = SupportTicket::new("basic", 1, "password reset").unwrap();
    let exhausted = SupportTicket::new("billing", 2, "invoice copy").unwrap();

    c.bench_function("chain/support_first_link", |b| {
        b.iter(|| chain.handle(&first));
    });
    c.bench_function("chain/support_exhausted", |b| {
        b.iter(|| chain.handle(&exhausted));
    });
}

fn bench_expense_chain(c: &mut Criterion) {
    let chain = expense_chain();
    let top = ExpenseRequest::dollars(75_000, "renovation").unwrap();

    c.bench_function("chain/expense_top_level", |b| {
        b.iter(|| chain.handle(&top));
    });
}

criterion_group!(benches, bench_support_chain, bench_expense_chain);
criterion_main!(benches);
