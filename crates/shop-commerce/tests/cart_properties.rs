//! Property tests for the cart reducer.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::test_runner::Config;
use shop_commerce::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
    Adjust(usize, i64),
}

const PRICE_IDS: [&str; 4] = ["price_a", "price_b", "price_c", "price_d"];

fn product(index: usize) -> Product {
    let price_id = PRICE_IDS[index];
    Product::new(
        format!("prod_{index}"),
        price_id,
        format!("Product {index}"),
        Money::new(100 * (index as i64 + 1), Currency::USD),
    )
}

fn op() -> impl Strategy<Value = Op> {
    let index = 0..PRICE_IDS.len();
    prop_oneof![
        index.clone().prop_map(Op::Add),
        index.clone().prop_map(Op::Remove),
        (index, -3_i64..=3).prop_map(|(i, d)| Op::Adjust(i, d)),
    ]
}

fn apply(cart: &mut Cart, op: &Op) {
    match op {
        Op::Add(i) => {
            cart.add(&product(*i));
        }
        Op::Remove(i) => {
            cart.remove(&PriceId::new(PRICE_IDS[*i]));
        }
        Op::Adjust(i, delta) => {
            cart.adjust_quantity(&PriceId::new(PRICE_IDS[*i]), *delta);
        }
    }
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn at_most_one_line_per_price_id(ops in prop::collection::vec(op(), 0..64)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);
        }

        let unique: HashSet<_> = cart.lines().iter().map(|l| l.price_id().clone()).collect();
        prop_assert_eq!(unique.len(), cart.len());
        prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn totals_match_lines(ops in prop::collection::vec(op(), 0..64)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);
        }

        let totals = cart.totals().unwrap();
        let expected: i64 = cart
            .lines()
            .iter()
            .map(|l| l.product.price.amount_cents * i64::from(l.quantity))
            .sum();
        prop_assert_eq!(totals.subtotal.amount_cents, expected);
        prop_assert_eq!(totals.item_count, cart.item_count());
    }

    #[test]
    fn checkout_items_mirror_cart_order(ops in prop::collection::vec(op(), 0..64)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);
        }

        let items = cart.checkout_items();
        prop_assert_eq!(items.len(), cart.len());
        for (item, line) in items.iter().zip(cart.lines()) {
            prop_assert_eq!(&item.price_id, line.price_id());
            prop_assert_eq!(item.quantity, line.quantity);
            prop_assert!(item.quantity > 0);
        }
    }

    #[test]
    fn adjust_on_absent_id_is_noop(delta in -5_i64..=5) {
        let mut cart = Cart::new();
        cart.add(&product(0));
        let before = cart.clone();

        prop_assert_eq!(cart.adjust_quantity(&PriceId::new("price_missing"), delta), None);
        prop_assert_eq!(cart, before);
    }
}
