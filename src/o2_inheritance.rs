// OOP 2: Inheritance - Behavior Sharing via Default Methods
// Rust has no class inheritance; shared behavior lives in a trait's provided
// methods, and each type supplies only what differs.

trait Animal {
    fn name(&self) -> &str;

    fn moved(&self, distance: u32) -> String {
        format!("{} moved {} meters", self.name(), distance)
    }
}

struct Dog {
    name: String,
}

impl Dog {
    fn new() -> Self {
        Self {
            name: "Dog".to_string(),
        }
    }

    fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }
}

fn main() {
    println!("OOP 2: Inheritance");
    println!("==================\n");

    let my_dog = Dog::new();
    println!("{}", my_dog.moved(5));

    let rex = Dog::with_name("Rex");
    println!("{}", rex.moved(12));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name() {
        assert_eq!(Dog::new().name(), "Dog");
    }

    #[test]
    fn test_moved_uses_the_animal_name() {
        assert_eq!(Dog::new().moved(5), "Dog moved 5 meters");
        assert_eq!(Dog::with_name("Rex").moved(12), "Rex moved 12 meters");
    }
}
