//! Benchmarks for the order book hot paths.
//!
//! ## Running
//!
//! ```bash
//! cargo bench
//! cargo bench -- single_match
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput,
};

use matchbook::{Order, OrderBook, Side};

// ============================================================================
// Helpers
// ============================================================================

fn buy(client: u64, price: i64, volume: i64, order_id: u64) -> Order {
    Order::new(client, "ABC", Side::Buy, price, volume, order_id)
}

fn sell(client: u64, price: i64, volume: i64, order_id: u64) -> Order {
    Order::new(client, "ABC", Side::Sell, price, volume, order_id)
}

/// Build a book with `levels` ask levels of `per_level` orders each,
/// starting at `base_price` and stepping by one tick per level.
fn populate_asks(levels: usize, per_level: usize, base_price: i64) -> OrderBook {
    let mut book = OrderBook::with_capacity(levels * per_level);
    let mut order_id = 0;
    for level in 0..levels {
        let price = base_price + level as i64;
        for _ in 0..per_level {
            book.submit(sell(1, price, 10, order_id)).unwrap();
            order_id += 1;
        }
    }
    book
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_rest_order(c: &mut Criterion) {
    let book = populate_asks(100, 10, 1_000);

    c.bench_function("rest_non_crossing_order", |b| {
        b.iter_batched(
            || book.clone(),
            |mut book| {
                // Bid below the touch: pure insertion path
                black_box(book.submit(buy(2, 900, 10, u64::MAX)).unwrap())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_single_match(c: &mut Criterion) {
    let book = populate_asks(100, 10, 1_000);

    c.bench_function("single_match", |b| {
        b.iter_batched(
            || book.clone(),
            |mut book| black_box(book.submit(buy(2, 1_000, 10, u64::MAX)).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.throughput(Throughput::Elements(1_000));

    let book = populate_asks(100, 10, 1_000);
    group.bench_function("sweep_100_levels", |b| {
        b.iter_batched(
            || book.clone(),
            // 100 levels * 10 orders * 10 lots
            |mut book| black_box(book.submit(buy(2, 2_000, 10_000, u64::MAX)).unwrap()),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_cancel(c: &mut Criterion) {
    let book = populate_asks(100, 10, 1_000);

    c.bench_function("cancel_mid_queue", |b| {
        b.iter_batched(
            || book.clone(),
            // Order 5 sits in the middle of the best level's queue
            |mut book| black_box(book.cancel(Side::Sell, (1, 5))),
            BatchSize::SmallInput,
        )
    });
}

fn bench_queries(c: &mut Criterion) {
    let book = populate_asks(100, 10, 1_000);

    c.bench_function("get_volume_at_price", |b| {
        b.iter(|| black_box(book.get_volume_at_price(black_box(Side::Sell), black_box(1_050))))
    });

    c.bench_function("get_prices", |b| {
        b.iter(|| black_box(book.get_prices(black_box(Side::Sell))))
    });
}

criterion_group!(
    benches,
    bench_rest_order,
    bench_single_match,
    bench_sweep,
    bench_cancel,
    bench_queries
);
criterion_main!(benches);
