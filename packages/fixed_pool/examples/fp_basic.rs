//! Basic usage of the `fixed_pool` crate:
//!
//! * Creating a pool with room for two items.
//! * Creating items and observing their construction and destruction.
//! * Looking up the slot of an item from a reference to it.
//! * Running out of slots.
//!
//! The example always logs at trace level, so the output also shows what the pool does internally.

use fixed_pool::FixedPool;
use tracing::Level;

struct TestItem {
    value: i32,
}

impl TestItem {
    fn new(value: i32) -> Self {
        println!("  [TestItem] constructed {value}");
        Self { value }
    }
}

impl Drop for TestItem {
    fn drop(&mut self) {
        println!("  [TestItem] dropped {}", self.value);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .init();

    let mut pool = FixedPool::<TestItem, 2>::new();

    pool.create(TestItem::new(111)).unwrap();
    pool.create(TestItem::new(222)).unwrap();

    println!("Occupied slots: {}", pool.count());

    // References obtained from the pool can be mapped back to their slot.
    let first = pool.get(0).unwrap();
    let index = pool.position(first).unwrap();
    println!("Item {} lives in slot {index}", first.value);

    pool.destroy(index).unwrap();
    println!("Destroyed slot {index}, occupied slots: {}", pool.count());

    // This takes the slot we just freed.
    let third = pool.create_with(|| TestItem::new(333)).unwrap();
    println!("Created item {}", third.value);

    // There is no room for a fourth item.
    match pool.create(TestItem::new(444)) {
        Ok(_) => println!("Unexpectedly found a free slot"),
        Err(e) => println!("Caught error: {e}"),
    }

    for (index, item) in &pool {
        println!("Slot {index} holds {}", item.value);
    }

    // The remaining items are dropped together with the pool.
}
