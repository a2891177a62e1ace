#![no_main]
#[macro_use]
extern crate libfuzzer_sys;

use std::cmp::Ordering;

use poker_equity::core::{Card, Hand, HandCategory, compare, evaluate};

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    first: Vec<Card>,
    second: Vec<Card>,
}

fuzz_target!(|input: Input| {
    let (Ok(a), Ok(b)) = (
        Hand::new_with_cards(input.first),
        Hand::new_with_cards(input.second),
    ) else {
        return;
    };
    if a.len() < 5 || a.len() > 7 || b.len() < 5 || b.len() > 7 {
        return;
    }

    let a = evaluate(&a[..]).unwrap();
    let b = evaluate(&b[..]).unwrap();
    assert!(a.category <= HandCategory::StraightFlush);

    assert_eq!(Ordering::Equal, compare(&a, &a));
    assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
});
