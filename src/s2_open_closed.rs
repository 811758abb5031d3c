//! Principle 2: Open/Closed
//! Example: Customer Discount Tiers
//!
//! Run with: cargo run --bin s2_open_closed

// New tiers are added by implementing the trait; Discount never changes.
trait Customer {
    fn discount(&self) -> u32;
    fn loyalty_points(&self, amount_spent: u64) -> u64;
}

struct RegularCustomer;
impl Customer for RegularCustomer {
    fn discount(&self) -> u32 {
        10
    }

    fn loyalty_points(&self, amount_spent: u64) -> u64 {
        amount_spent
    }
}

struct PremiumCustomer;
impl Customer for PremiumCustomer {
    fn discount(&self) -> u32 {
        20
    }

    fn loyalty_points(&self, amount_spent: u64) -> u64 {
        amount_spent * 2
    }
}

struct GoldCustomer;
impl Customer for GoldCustomer {
    fn discount(&self) -> u32 {
        30
    }

    fn loyalty_points(&self, amount_spent: u64) -> u64 {
        amount_spent * 3
    }
}

struct Discount;

impl Discount {
    fn give_discount(&self, customer: &dyn Customer) -> u32 {
        customer.discount()
    }
}

fn main() {
    println!("Principle 2: Open/Closed");
    println!("========================\n");

    let discount = Discount;
    let customers: Vec<(&str, Box<dyn Customer>)> = vec![
        ("regular", Box::new(RegularCustomer)),
        ("premium", Box::new(PremiumCustomer)),
        ("gold", Box::new(GoldCustomer)),
    ];

    for (tier, customer) in &customers {
        println!(
            "{tier}: {}% off, {} points on a 100 spend",
            discount.give_discount(customer.as_ref()),
            customer.loyalty_points(100)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_discounts() {
        let discount = Discount;
        assert_eq!(discount.give_discount(&RegularCustomer), 10);
        assert_eq!(discount.give_discount(&PremiumCustomer), 20);
        assert_eq!(discount.give_discount(&GoldCustomer), 30);
    }

    #[test]
    fn test_loyalty_points_scale_by_tier() {
        assert_eq!(RegularCustomer.loyalty_points(100), 100);
        assert_eq!(PremiumCustomer.loyalty_points(100), 200);
        assert_eq!(GoldCustomer.loyalty_points(100), 300);
    }
}
