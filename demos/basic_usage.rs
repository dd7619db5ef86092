// ============================================================================
// Basic Usage Example
// ============================================================================

use check_writer::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    check_writer::utils::logging::init(tracing::Level::DEBUG);

    println!("=== Check Writer Example ===\n");

    let writer = CheckWriter::default();

    println!("String amounts:");
    for input in ["123.46", "-45", "7,456,123", "0.345", "0.004", "   "] {
        match writer.convert(input) {
            Ok(words) => println!("  {:>14} -> {:?}", format!("{input:?}"), words),
            Err(e) => println!("  {:>14} -> error: {}", format!("{input:?}"), e),
        }
    }

    println!("\nFloat amounts:");
    for input in [999.99, -102_234.0, 9_000_000_000_000_001.0] {
        match writer.convert(input) {
            Ok(words) => println!("  {:>22} -> {:?}", input, words),
            Err(e) => println!("  {:>22} -> error: {}", input, e),
        }
    }

    println!("\nRejected amounts:");
    for input in ["74,56,123", ".25", "1000000000000000001"] {
        if let Err(e) = writer.convert(input) {
            let kind = if e.is_malformed() { "malformed" } else { "out of range" };
            println!("  {:>22} -> {}: {}", input, kind, e);
        }
    }

    // A payroll writer: no commas, at most ten thousand dollars
    let payroll = CheckWriterBuilder::new()
        .with_bounds(Decimal::ZERO, Decimal::from(10_000))
        .comma_free()
        .build();

    match payroll {
        Ok(payroll) => {
            println!("\nPayroll writer:");
            for input in ["2500.5", "2,500.50", "12000"] {
                match payroll.convert(input) {
                    Ok(words) => println!("  {:>10} -> {:?}", input, words),
                    Err(e) => println!("  {:>10} -> error: {}", input, e),
                }
            }
        }
        Err(e) => eprintln!("invalid payroll configuration: {e}"),
    }
}
