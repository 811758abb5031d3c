// Pattern 5: Prototype - New Objects by Copying Existing Ones
// Clone-based construction, trait-object clones, and deep vs shallow copies.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Example: User Profile Prototype
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct UserProfile {
    name: String,
    age: u32,
    email: String,
}

fn user_prototype_example() {
    let original = UserProfile {
        name: "John".to_string(),
        age: 30,
        email: "john@example.com".to_string(),
    };

    let mut copy = original.clone();
    copy.name = "Johanna".to_string();

    println!("Original: {:?}", original);
    println!("Copy:     {:?}", copy);
    println!(
        "Copies are independent: {}",
        original.name != copy.name && original.email == copy.email
    );
}

// ============================================================================
// Example: Cloning a Shape Hierarchy
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct ShapeProperties {
    color: String,
    x: i32,
    y: i32,
}

trait Shape {
    fn clone_box(&self) -> Box<dyn Shape>;
    fn describe(&self) -> String;
    fn properties_mut(&mut self) -> &mut ShapeProperties;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Clone)]
struct Rectangle {
    properties: ShapeProperties,
    width: u32,
    height: u32,
}

impl Shape for Rectangle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!(
            "{} rectangle {}x{} at ({}, {})",
            self.properties.color, self.width, self.height, self.properties.x, self.properties.y
        )
    }

    fn properties_mut(&mut self) -> &mut ShapeProperties {
        &mut self.properties
    }
}

#[derive(Clone)]
struct Circle {
    properties: ShapeProperties,
    radius: u32,
}

impl Shape for Circle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!(
            "{} circle r={} at ({}, {})",
            self.properties.color, self.radius, self.properties.x, self.properties.y
        )
    }

    fn properties_mut(&mut self) -> &mut ShapeProperties {
        &mut self.properties
    }
}

fn shape_prototype_example() {
    let red_rectangle = Rectangle {
        properties: ShapeProperties {
            color: "red".to_string(),
            x: 20,
            y: 10,
        },
        width: 10,
        height: 20,
    };

    // Cloning through the trait object keeps the concrete variant.
    let mut another: Box<dyn Shape> = red_rectangle.clone_box();
    another.properties_mut().color = "blue".to_string();

    println!("Original: {}", red_rectangle.describe());
    println!("Clone:    {}", another.describe());

    let shapes: Vec<Box<dyn Shape>> = vec![
        red_rectangle.clone_box(),
        Box::new(Circle {
            properties: ShapeProperties {
                color: "green".to_string(),
                x: 0,
                y: 0,
            },
            radius: 5,
        }),
    ];
    let copies = shapes.clone();
    for shape in &copies {
        println!("Copied: {}", shape.describe());
    }
}

// ============================================================================
// Example: Deep vs Shallow Copies
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Address {
    street: String,
    city: String,
}

// Shallow: the address is behind Rc, so clones share it.
#[derive(Clone)]
struct SharedContact {
    name: String,
    address: Rc<RefCell<Address>>,
}

// Deep: plain owned fields; a serialization round trip also works as a
// fully independent copy, mirroring the JSON stringify/parse trick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Contact {
    name: String,
    address: Address,
}

fn deep_copy(contact: &Contact) -> serde_json::Result<Contact> {
    let json = serde_json::to_string(contact)?;
    serde_json::from_str(&json)
}

fn copy_depth_example() -> serde_json::Result<()> {
    let shared = SharedContact {
        name: "John".to_string(),
        address: Rc::new(RefCell::new(Address {
            street: "123 Main St".to_string(),
            city: "New York".to_string(),
        })),
    };

    let shallow = shared.clone();
    shallow.address.borrow_mut().city = "Los Angeles".to_string();
    println!("Shallow copy city:  {}", shallow.address.borrow().city);
    println!("Original city:      {}", shared.address.borrow().city);
    println!(
        "Address is shared ({} strong references)",
        Rc::strong_count(&shared.address)
    );

    let owned = Contact {
        name: shared.name.clone(),
        address: shared.address.borrow().clone(),
    };
    let mut deep = deep_copy(&owned)?;
    deep.address.city = "San Francisco".to_string();
    println!("Deep copy city:     {}", deep.address.city);
    println!("Original city:      {}", owned.address.city);

    Ok(())
}

fn main() {
    println!("Pattern 5: Prototype");
    println!("====================\n");

    println!("=== User Profile Prototype ===");
    user_prototype_example();
    println!();

    println!("=== Cloning a Shape Hierarchy ===");
    shape_prototype_example();
    println!();

    println!("=== Deep vs Shallow Copies ===");
    if let Err(err) = copy_depth_example() {
        eprintln!("copy demo failed: {err}");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_clone_is_independent() {
        let original = UserProfile {
            name: "John".to_string(),
            age: 30,
            email: "john@example.com".to_string(),
        };
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.age = 31;
        assert_eq!(original.age, 30);
    }

    #[test]
    fn test_shape_clone_keeps_variant_and_detaches_state() {
        let rectangle = Rectangle {
            properties: ShapeProperties {
                color: "red".to_string(),
                x: 1,
                y: 2,
            },
            width: 3,
            height: 4,
        };

        let mut clone = rectangle.clone_box();
        clone.properties_mut().color = "blue".to_string();

        assert!(clone.describe().contains("rectangle"));
        assert!(clone.describe().contains("blue"));
        assert_eq!(rectangle.properties.color, "red");
    }

    #[test]
    fn test_shallow_clone_shares_address() {
        let contact = SharedContact {
            name: "John".to_string(),
            address: Rc::new(RefCell::new(Address {
                street: "123 Main St".to_string(),
                city: "New York".to_string(),
            })),
        };

        let shallow = contact.clone();
        assert_eq!(Rc::strong_count(&contact.address), 2);

        shallow.address.borrow_mut().city = "Los Angeles".to_string();
        assert_eq!(contact.address.borrow().city, "Los Angeles");
    }

    #[test]
    fn test_deep_copy_detaches_address() {
        let contact = Contact {
            name: "John".to_string(),
            address: Address {
                street: "123 Main St".to_string(),
                city: "New York".to_string(),
            },
        };

        let mut deep = deep_copy(&contact).unwrap();
        deep.address.city = "San Francisco".to_string();

        assert_eq!(contact.address.city, "New York");
        assert_eq!(deep.name, contact.name);
    }
}
