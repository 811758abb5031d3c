// Pattern 3: Abstract Factory - Families of Related Products
// One factory interface creates a whole family of products that belong together.

use std::rc::Rc;

// ============================================================================
// Example: Product Family Sketch
// ============================================================================

trait ProductA {
    fn operation_a(&self) -> String;
}

trait ProductB {
    fn operation_b(&self) -> String;
    fn combined_operation(&self, collaborator: &dyn ProductA) -> String;
}

trait Factory {
    fn create_product_a(&self) -> Box<dyn ProductA>;
    fn create_product_b(&self) -> Box<dyn ProductB>;
}

struct ConcreteProductA;
impl ProductA for ConcreteProductA {
    fn operation_a(&self) -> String {
        "Product A".to_string()
    }
}

struct ConcreteProductB;
impl ProductB for ConcreteProductB {
    fn operation_b(&self) -> String {
        "Product B".to_string()
    }

    fn combined_operation(&self, collaborator: &dyn ProductA) -> String {
        format!("{} + {}", collaborator.operation_a(), self.operation_b())
    }
}

struct ConcreteFactory;
impl Factory for ConcreteFactory {
    fn create_product_a(&self) -> Box<dyn ProductA> {
        Box::new(ConcreteProductA)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        Box::new(ConcreteProductB)
    }
}

fn product_family_example() {
    let factory = ConcreteFactory;
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    println!("A alone: {}", product_a.operation_a());
    println!("B alone: {}", product_b.operation_b());
    println!("Combined: {}", product_b.combined_operation(product_a.as_ref()));
}

// ============================================================================
// Example: Cross-platform GUI Factory
// ============================================================================

trait Button {
    fn render(&self) -> String;
    // Invokes `callback` exactly once, synchronously, before returning.
    fn on_click(&self, callback: &dyn Fn());
}

trait Checkbox {
    fn render(&self) -> String;
    fn toggle(&self);
}

trait GuiFactory {
    fn create_button(&self) -> Rc<dyn Button>;
    fn create_checkbox(&self, button: Rc<dyn Button>) -> Box<dyn Checkbox>;
}

struct WindowsButton;
impl Button for WindowsButton {
    fn render(&self) -> String {
        "Button rendered in Windows".to_string()
    }

    fn on_click(&self, callback: &dyn Fn()) {
        println!("Button clicked in Windows");
        callback();
    }
}

// The checkbox routes its toggle through the button it was wired to.
struct WindowsCheckbox {
    button: Rc<dyn Button>,
}

impl Checkbox for WindowsCheckbox {
    fn render(&self) -> String {
        "Checkbox rendered in Windows".to_string()
    }

    fn toggle(&self) {
        self.button
            .on_click(&|| println!("Checkbox toggled in Windows"));
    }
}

struct MacOsButton;
impl Button for MacOsButton {
    fn render(&self) -> String {
        "Button rendered in macOS".to_string()
    }

    fn on_click(&self, callback: &dyn Fn()) {
        println!("Button clicked in macOS");
        callback();
    }
}

struct MacOsCheckbox {
    button: Rc<dyn Button>,
}

impl Checkbox for MacOsCheckbox {
    fn render(&self) -> String {
        "Checkbox rendered in macOS".to_string()
    }

    fn toggle(&self) {
        self.button
            .on_click(&|| println!("Checkbox toggled in macOS"));
    }
}

struct WindowsFactory;
impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Rc<dyn Button> {
        Rc::new(WindowsButton)
    }

    fn create_checkbox(&self, button: Rc<dyn Button>) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox { button })
    }
}

struct MacOsFactory;
impl GuiFactory for MacOsFactory {
    fn create_button(&self) -> Rc<dyn Button> {
        Rc::new(MacOsButton)
    }

    fn create_checkbox(&self, button: Rc<dyn Button>) -> Box<dyn Checkbox> {
        Box::new(MacOsCheckbox { button })
    }
}

// Client code: consumes any factory without knowing its concrete variant.
fn render_ui(factory: &dyn GuiFactory) {
    let button = factory.create_button();
    let checkbox = factory.create_checkbox(Rc::clone(&button));

    println!("{}", checkbox.render());
    println!("{}", button.render());

    button.on_click(&|| println!("Click handled by client"));
}

fn gui_factory_example() {
    println!("Windows family:");
    render_ui(&WindowsFactory);

    println!("\nmacOS family:");
    render_ui(&MacOsFactory);

    println!("\nToggling a checkbox through its button:");
    let factory = MacOsFactory;
    let button = factory.create_button();
    let checkbox = factory.create_checkbox(Rc::clone(&button));
    checkbox.toggle();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    // Test double wired in through create_checkbox, so toggles can be counted.
    #[derive(Default)]
    struct SpyButton {
        clicks: RefCell<u32>,
    }

    impl Button for SpyButton {
        fn render(&self) -> String {
            "spy button".to_string()
        }

        fn on_click(&self, callback: &dyn Fn()) {
            *self.clicks.borrow_mut() += 1;
            callback();
        }
    }

    #[test]
    fn test_product_family_combined_operation() {
        let factory = ConcreteFactory;
        let a = factory.create_product_a();
        let b = factory.create_product_b();
        assert_eq!(b.combined_operation(a.as_ref()), "Product A + Product B");
    }

    #[test]
    fn test_windows_products_carry_platform_label() {
        let factory = WindowsFactory;
        let button = factory.create_button();
        let checkbox = factory.create_checkbox(Rc::clone(&button));

        assert!(button.render().to_lowercase().contains("windows"));
        assert!(checkbox.render().to_lowercase().contains("windows"));
    }

    #[test]
    fn test_macos_products_carry_platform_label() {
        let factory = MacOsFactory;
        let button = factory.create_button();
        let checkbox = factory.create_checkbox(Rc::clone(&button));

        assert!(button.render().to_lowercase().contains("macos"));
        assert!(checkbox.render().to_lowercase().contains("macos"));
    }

    #[test]
    fn test_on_click_invokes_callback_exactly_once() {
        let invocations = Cell::new(0u32);

        for factory in [&WindowsFactory as &dyn GuiFactory, &MacOsFactory] {
            invocations.set(0);
            let button = factory.create_button();
            button.on_click(&|| invocations.set(invocations.get() + 1));
            // The call returned, so the callback already ran: synchronous dispatch.
            assert_eq!(invocations.get(), 1);
        }
    }

    #[test]
    fn test_toggle_routes_through_wired_button_once() {
        let spy = Rc::new(SpyButton::default());

        let checkbox = WindowsFactory.create_checkbox(spy.clone());
        checkbox.toggle();
        assert_eq!(*spy.clicks.borrow(), 1);

        let checkbox = MacOsFactory.create_checkbox(spy.clone());
        checkbox.toggle();
        assert_eq!(*spy.clicks.borrow(), 2);
    }

    #[test]
    fn test_render_ui_accepts_any_factory() {
        // Must not panic for either variant.
        render_ui(&WindowsFactory);
        render_ui(&MacOsFactory);
    }
}

fn main() {
    println!("Pattern 3: Abstract Factory");
    println!("===========================\n");

    println!("=== Product Family Sketch ===");
    product_family_example();
    println!();

    println!("=== Cross-platform GUI Factory ===");
    gui_factory_example();
}
