// Pattern 4: Builder - Step-by-step Object Construction
// A director drives a builder trait; a fluent builder assembles a customer record.

use serde::Serialize;

// ============================================================================
// Example: Parts Builder with a Director
// ============================================================================

#[derive(Debug, Default, PartialEq)]
struct Product {
    parts: Vec<String>,
}

impl Product {
    fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    fn list_parts(&self) -> String {
        format!("Product parts: {}", self.parts.join(", "))
    }
}

trait Builder {
    fn set_part_a(&mut self);
    fn set_part_b(&mut self);
    fn set_part_c(&mut self);
}

#[derive(Default)]
struct ConcreteBuilder {
    product: Product,
}

impl ConcreteBuilder {
    fn new() -> Self {
        Self::default()
    }

    // Taking the product resets the builder for the next run.
    fn take_product(&mut self) -> Product {
        std::mem::take(&mut self.product)
    }
}

impl Builder for ConcreteBuilder {
    fn set_part_a(&mut self) {
        self.product.add("Part A");
    }

    fn set_part_b(&mut self) {
        self.product.add("Part B");
    }

    fn set_part_c(&mut self) {
        self.product.add("Part C");
    }
}

// The director knows the assembly orders, not the parts.
struct Director;

impl Director {
    fn build_minimal_viable_product(builder: &mut dyn Builder) {
        builder.set_part_a();
    }

    fn build_full_featured_product(builder: &mut dyn Builder) {
        builder.set_part_a();
        builder.set_part_b();
        builder.set_part_c();
    }
}

fn director_example() {
    let mut builder = ConcreteBuilder::new();

    Director::build_minimal_viable_product(&mut builder);
    let minimal = builder.take_product();
    println!("{}", minimal.list_parts());

    Director::build_full_featured_product(&mut builder);
    let full = builder.take_product();
    println!("{}", full.list_parts());
}

// ============================================================================
// Example: Fluent Customer Builder
// ============================================================================

#[derive(Debug, Serialize, PartialEq)]
struct Customer {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
}

impl Customer {
    fn builder() -> CustomerBuilder {
        CustomerBuilder::default()
    }
}

#[derive(Default)]
struct CustomerBuilder {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
}

impl CustomerBuilder {
    // Each setter consumes `self` and returns it for chaining.
    fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    fn build(self) -> Customer {
        Customer {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

struct CustomerDirector;

impl CustomerDirector {
    fn build_minimal_customer(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Customer {
        Customer::builder()
            .first_name(first_name)
            .last_name(last_name)
            .email(email)
            .build()
    }
}

fn customer_builder_example() {
    let customer = Customer::builder()
        .first_name("Jane")
        .last_name("Smith")
        .email("jsmith@example.com")
        .phone_number("+1-555-0100")
        .build();

    println!(
        "Full customer:\n{}",
        serde_json::to_string_pretty(&customer).expect("customer serializes")
    );

    let minimal = CustomerDirector::build_minimal_customer("John", "Doe", "jdoe@example.com");
    println!(
        "Minimal customer:\n{}",
        serde_json::to_string_pretty(&minimal).expect("customer serializes")
    );
}

fn main() {
    println!("Pattern 4: Builder");
    println!("==================\n");

    println!("=== Parts Builder with a Director ===");
    director_example();
    println!();

    println!("=== Fluent Customer Builder ===");
    customer_builder_example();
}

// ============================================================================
// Tests
// ============================================================================
