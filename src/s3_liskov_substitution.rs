//! Principle 3: Liskov Substitution
//! Example: Shapes and Payment Processors
//!
//! Run with: cargo run --bin s3_liskov_substitution
//!
//! Any implementor can stand in wherever the trait is expected, and the
//! calling code behaves the same way.

// ============================================================================
// Example: Shape Area
// ============================================================================

trait Shape {
    fn calculate_area(&self) -> f64;
}

struct Rectangle {
    width: f64,
    height: f64,
}

impl Shape for Rectangle {
    fn calculate_area(&self) -> f64 {
        self.width * self.height
    }
}

struct Square {
    side: f64,
}

impl Shape for Square {
    fn calculate_area(&self) -> f64 {
        self.side * self.side
    }
}

fn area(shape: &dyn Shape) -> f64 {
    shape.calculate_area()
}

fn shape_example() {
    let rectangle = Rectangle {
        width: 10.0,
        height: 12.0,
    };
    let square = Square { side: 10.0 };

    println!("Rectangle area: {}", area(&rectangle));
    println!("Square area: {}", area(&square));
}

// ============================================================================
// Example: Payment Processors
// ============================================================================

trait PaymentProcessor {
    fn process_payment(&self, amount: u32) -> String;
}

struct CreditCardProcessor;
impl PaymentProcessor for CreditCardProcessor {
    fn process_payment(&self, amount: u32) -> String {
        format!("Processing credit card payment - amount {amount}")
    }
}

struct DebitCardProcessor;
impl PaymentProcessor for DebitCardProcessor {
    fn process_payment(&self, amount: u32) -> String {
        format!("Processing debit card payment - amount {amount}")
    }
}

struct PayPalProcessor;
impl PaymentProcessor for PayPalProcessor {
    fn process_payment(&self, amount: u32) -> String {
        format!("Processing PayPal payment - amount {amount}")
    }
}

fn execute_payment(processor: &dyn PaymentProcessor, amount: u32) {
    println!("{}", processor.process_payment(amount));
}

fn payment_example() {
    execute_payment(&PayPalProcessor, 10);
    execute_payment(&DebitCardProcessor, 10);
    execute_payment(&CreditCardProcessor, 10);
}

fn main() {
    println!("Principle 3: Liskov Substitution");
    println!("================================\n");

    println!("=== Shape Area ===");
    shape_example();
    println!();

    println!("=== Payment Processors ===");
    payment_example();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_shape_substitutes_in_area() {
        assert_eq!(
            area(&Rectangle {
                width: 10.0,
                height: 12.0
            }),
            120.0
        );
        assert_eq!(area(&Square { side: 10.0 }), 100.0);
    }

    #[test]
    fn test_any_processor_substitutes_in_execute_payment() {
        let processors: Vec<Box<dyn PaymentProcessor>> = vec![
            Box::new(CreditCardProcessor),
            Box::new(DebitCardProcessor),
            Box::new(PayPalProcessor),
        ];

        for processor in &processors {
            let output = processor.process_payment(10);
            assert!(output.starts_with("Processing"));
            assert!(output.contains("10"));
        }
    }
}
