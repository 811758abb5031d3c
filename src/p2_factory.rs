// Pattern 2: Factory - Construction Behind a Single Entry Point
// The caller names what it wants; the factory decides which concrete type to build.

use colored::Colorize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FactoryError {
    #[error("unknown car kind: '{0}'")]
    UnknownCarKind(String),
    #[error("unknown payment processor kind: '{0}'")]
    UnknownProcessorKind(String),
}

// ============================================================================
// Example: Car Factory
// ============================================================================

trait Car {
    fn display_info(&self) -> String;
}

struct Sedan {
    model: String,
    year: u32,
}

impl Car for Sedan {
    fn display_info(&self) -> String {
        format!("Sedan {} {}", self.model, self.year)
    }
}

struct Suv {
    model: String,
    year: u32,
}

impl Car for Suv {
    fn display_info(&self) -> String {
        format!("SUV {} {}", self.model, self.year)
    }
}

struct Hatchback {
    model: String,
    year: u32,
}

impl Car for Hatchback {
    fn display_info(&self) -> String {
        format!("Hatchback {} {}", self.model, self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CarKind {
    Sedan,
    Suv,
    Hatchback,
}

// The only failure in this snippet lives at the parse boundary: once a
// CarKind exists, construction cannot fail.
impl FromStr for CarKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedan" => Ok(CarKind::Sedan),
            "suv" => Ok(CarKind::Suv),
            "hatchback" => Ok(CarKind::Hatchback),
            other => Err(FactoryError::UnknownCarKind(other.to_string())),
        }
    }
}

struct CarFactory;

impl CarFactory {
    fn create(kind: CarKind, model: impl Into<String>, year: u32) -> Box<dyn Car> {
        let model = model.into();
        match kind {
            CarKind::Sedan => Box::new(Sedan { model, year }),
            CarKind::Suv => Box::new(Suv { model, year }),
            CarKind::Hatchback => Box::new(Hatchback { model, year }),
        }
    }

    fn create_from_name(
        name: &str,
        model: impl Into<String>,
        year: u32,
    ) -> Result<Box<dyn Car>, FactoryError> {
        Ok(Self::create(name.parse()?, model, year))
    }
}

fn car_factory_example() {
    let sedan = CarFactory::create(CarKind::Sedan, "Honda", 2020);
    let suv = CarFactory::create(CarKind::Suv, "Toyota", 2021);
    let hatchback = CarFactory::create(CarKind::Hatchback, "BMW", 2022);

    println!("{}", suv.display_info());
    println!("{}", hatchback.display_info());
    println!("{}", sedan.display_info());

    match CarFactory::create_from_name("tractor", "Deere", 2023) {
        Ok(car) => println!("{}", car.display_info()),
        Err(err) => println!("{}", err.to_string().red()),
    }
}

// ============================================================================
// Example: Payment Processor Factory
// ============================================================================

trait PaymentProcessor {
    fn process_payment(&self) -> String;
}

struct BankTransferProcessor {
    amount: u32,
}

impl PaymentProcessor for BankTransferProcessor {
    fn process_payment(&self) -> String {
        format!("Processing bank transfer - amount {}", self.amount)
    }
}

struct StripeProcessor {
    amount: u32,
}

impl PaymentProcessor for StripeProcessor {
    fn process_payment(&self) -> String {
        format!("Processing Stripe payment - amount {}", self.amount)
    }
}

struct PayPalProcessor {
    amount: u32,
}

impl PaymentProcessor for PayPalProcessor {
    fn process_payment(&self) -> String {
        format!("Processing PayPal payment - amount {}", self.amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ProcessorKind {
    BankTransfer,
    Stripe,
    PayPal,
}

impl FromStr for ProcessorKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "banktransfer" | "bank-transfer" | "bank_transfer" => Ok(ProcessorKind::BankTransfer),
            "stripe" => Ok(ProcessorKind::Stripe),
            "paypal" => Ok(ProcessorKind::PayPal),
            other => Err(FactoryError::UnknownProcessorKind(other.to_string())),
        }
    }
}

struct PaymentProcessorFactory;

impl PaymentProcessorFactory {
    fn create(kind: ProcessorKind, amount: u32) -> Box<dyn PaymentProcessor> {
        match kind {
            ProcessorKind::BankTransfer => Box::new(BankTransferProcessor { amount }),
            ProcessorKind::Stripe => Box::new(StripeProcessor { amount }),
            ProcessorKind::PayPal => Box::new(PayPalProcessor { amount }),
        }
    }
}

fn payment_factory_example() {
    for (name, amount) in [("bank-transfer", 200), ("paypal", 500), ("bitcoin", 100)] {
        match name.parse::<ProcessorKind>() {
            Ok(kind) => {
                let processor = PaymentProcessorFactory::create(kind, amount);
                println!("{}", processor.process_payment());
            }
            Err(err) => println!("{}", err.to_string().red()),
        }
    }
}

fn main() {
    println!("Pattern 2: Factory");
    println!("==================\n");

    println!("=== Car Factory ===");
    car_factory_example();
    println!();

    println!("=== Payment Processor Factory ===");
    payment_factory_example();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_kind_parses_case_insensitively() {
        assert_eq!("Sedan".parse::<CarKind>().unwrap(), CarKind::Sedan);
        assert_eq!("SUV".parse::<CarKind>().unwrap(), CarKind::Suv);
        assert_eq!("hatchback".parse::<CarKind>().unwrap(), CarKind::Hatchback);
    }

    #[test]
    fn test_unknown_car_kind_is_rejected() {
        let err = "tractor".parse::<CarKind>().unwrap_err();
        assert_eq!(err, FactoryError::UnknownCarKind("tractor".to_string()));
        assert!(err.to_string().contains("tractor"));
    }

    #[test]
    fn test_factory_builds_matching_variant() {
        let car = CarFactory::create(CarKind::Suv, "Toyota", 2021);
        assert_eq!(car.display_info(), "SUV Toyota 2021");

        let car = CarFactory::create_from_name("sedan", "Honda", 2020).unwrap();
        assert_eq!(car.display_info(), "Sedan Honda 2020");
    }

    #[test]
    fn test_processor_output_names_kind_and_amount() {
        let processor = PaymentProcessorFactory::create(ProcessorKind::Stripe, 500);
        let output = processor.process_payment();
        assert!(output.contains("Stripe"));
        assert!(output.contains("500"));
    }

    #[test]
    fn test_unknown_processor_kind_is_rejected() {
        assert_eq!(
            "bitcoin".parse::<ProcessorKind>().unwrap_err(),
            FactoryError::UnknownProcessorKind("bitcoin".to_string())
        );
    }
}
