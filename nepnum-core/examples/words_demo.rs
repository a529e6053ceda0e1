//! Word conversion demo
//!
//! Run: cargo run --example words_demo

use nepnum_core::{grouped_digits, words_of, Amount, Language};

fn main() {
    let word_cases: Vec<(Amount, Language, &str)> = vec![
        (Amount::Int(120000), Language::En, "one lakh twenty thousand"),
        (
            Amount::Decimal(123.45),
            Language::En,
            "one hundred twenty-three rupees and forty-five paise",
        ),
        (Amount::Int(34000000), Language::En, "three crore forty lakh"),
        (Amount::Decimal(1.01), Language::En, "one rupee and one paisa"),
        (Amount::Int(120000), Language::Np, "एक लाख बीस हजार"),
        (Amount::Decimal(1.01), Language::Np, "एक रुपैयाँ र एक पैसा"),
    ];

    println!("=== word conversion ===");
    for (amount, language, expected) in &word_cases {
        let result = words_of(*amount, *language);
        let status = if &result == expected { "ok " } else { "FAIL" };
        println!("[{}] {} ({}) -> {}", status, amount, language.tag(), result);
    }

    let digit_cases = ["1000000", "-120000", "123.45", "0"];

    println!("\n=== digit grouping ===");
    for input in &digit_cases {
        match grouped_digits(input) {
            Ok(result) => println!("[ok ] {} -> {}", input, result),
            Err(err) => println!("[FAIL] {} -> {}", input, err),
        }
    }
}
