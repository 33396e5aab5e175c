//! Demo binary: runs the classic handout scenario against the book and
//! prints the resulting trades and the final state digest.
//!
//! Set `RUST_LOG=matchbook=trace` to watch the matching engine's events.

use matchbook::{Order, OrderBook, Side};

const ALICE: u64 = 1;
const BOB: u64 = 2;
const CAROL: u64 = 3;
const DAVE: u64 = 4;
const ERIN: u64 = 5;

fn name(client: u64) -> &'static str {
    match client {
        ALICE => "Alice",
        BOB => "Bob",
        CAROL => "Carol",
        DAVE => "Dave",
        _ => "Erin",
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut book = OrderBook::with_capacity(16);
    let steps = [
        Order::new(ALICE, "ABC", Side::Buy, 150, 100, 0),
        Order::new(BOB, "ABC", Side::Buy, 160, 100, 0),
        Order::new(CAROL, "ABC", Side::Buy, 160, 100, 0),
        Order::new(DAVE, "ABC", Side::Sell, 160, 150, 0),
        Order::new(ERIN, "ABC", Side::Sell, 150, 100, 0),
    ];

    for order in steps {
        println!(
            "{} submits {:?} {} @ {}",
            name(order.client),
            order.side,
            order.volume,
            order.price
        );
        let trades = match book.submit(order) {
            Ok(trades) => trades,
            Err(e) => {
                eprintln!("  rejected: {e}");
                continue;
            }
        };
        for trade in &trades {
            println!(
                "  trade: {} sells {} to {} @ {}",
                name(trade.seller),
                trade.volume,
                name(trade.buyer),
                trade.price
            );
        }
        if trades.is_empty() {
            println!("  rests, no trades");
        }
    }

    println!();
    println!("bid prices: {:?}", book.get_prices(Side::Buy));
    println!("ask prices: {:?}", book.get_prices(Side::Sell));
    println!("state digest: {}", hex::encode(book.state_digest()));
}
