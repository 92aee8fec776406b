criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_five_cards,
        searching_prime_products,
        counting_river_nuts,
        counting_turn_nuts,
        counting_flop_nuts,
}

fn evaluating_five_cards(c: &mut criterion::Criterion) {
    let cards = deal(5);
    let cards = <[Card; 5]>::try_from(cards).expect("five cards");
    c.bench_function("evaluate a 5-card hand", |b| b.iter(|| evaluate(cards)));
}

fn searching_prime_products(c: &mut criterion::Criterion) {
    c.bench_function("binary search the prime products", |b| {
        b.iter(|| Lookup::get().find(41 * 41 * 41 * 41 * 37))
    });
}

fn counting_river_nuts(c: &mut criterion::Criterion) {
    let scenario = scenario(Street::Rive);
    c.bench_function("count nuts on a River board", |b| b.iter(|| scenario.river()));
}

fn counting_turn_nuts(c: &mut criterion::Criterion) {
    let scenario = scenario(Street::Turn);
    c.bench_function("count nuts over all Turn runouts", |b| b.iter(|| scenario.turn()));
}

fn counting_flop_nuts(c: &mut criterion::Criterion) {
    let scenario = scenario(Street::Flop);
    c.bench_function("count nuts over all Flop runouts", |b| b.iter(|| scenario.flop()));
}

/// n distinct random cards
fn deal(n: usize) -> Vec<Card> {
    Deck::new().take(n).collect()
}

/// a random hole and board with nothing else known
fn scenario(street: Street) -> Scenario {
    let cards = deal(Hole::SIZE + street.n_observed());
    let (hole, board) = cards.split_at(Hole::SIZE);
    Scenario::new(board, hole, &[]).expect("distinct cards")
}

use omaha_nuts::cards::*;
use omaha_nuts::nuts::Scenario;
