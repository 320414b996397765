// src/bin/demo.rs
//
// Walks through the Rational API. Set RUST_LOG=debug to see rejected inputs.

use ratio64::{Rational, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut f1 = Rational::new(3, 4)?;
    let mut f2 = Rational::new(1, 2)?;
    let f3 = Rational::new(12, 16)?;

    println!("Fraction 1: {}", f1);
    println!("Decimal form of Fraction 1: {}\n", f1.to_decimal());
    println!("Negative Fraction 1: {}", -f1);
    println!("Fraction 2: {}", f2);
    println!("Decimal form of Fraction 2: {}\n", f2.to_decimal());

    println!("Fraction 1 + Fraction 2: {}", f1 + f2);
    println!("Fraction 1 - Fraction 2: {}", f1 - f2);
    println!("Fraction 1 * Fraction 2: {}", f1 * f2);
    println!("Fraction 1 / Fraction 2: {}", f1 / f2);
    let power = f1.pow(&f2)?;
    println!("Fraction 1 to the power of Fraction 2: {} ({})\n", power, power.to_decimal());

    println!("Fraction 1 is {}equivalent to Fraction 2.", if f1 == f2 { "" } else { "not " });
    println!("Fraction 1 is {}equivalent to Fraction 3.", if f1 == f3 { "" } else { "not " });

    f1.increment();
    f2.decrement();
    println!("Fraction 1 + 1: {}", f1);
    println!("Fraction 2 - 1: {}", f2);

    for text in ["7/10", "7:10", "7//10", "5/"] {
        match text.parse::<Rational>() {
            Ok(r) => println!("{:?} parses to {}", text, r),
            Err(e) => println!("{:?} is rejected: {}", text, e),
        }
    }

    Ok(())
}
