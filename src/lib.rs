// Patterns & Principles Catalog
// This crate provides runnable, self-contained examples; each binary is one snippet.

pub mod catalog {
    //! # Patterns & Principles Catalog
    //!
    //! Runnable examples for:
    //!
    //! ## Creational Patterns
    //! - Singleton (OnceLock global, logger)
    //! - Factory (car factory, payment processors)
    //! - Abstract Factory (cross-platform GUI family)
    //! - Builder (director-driven parts, fluent customer builder)
    //! - Prototype (Clone, trait-object clones, deep vs shallow copy)
    //!
    //! ## Structural Patterns
    //! - Facade (coffee maker, home theater)
    //!
    //! ## SOLID Principles
    //! - Single Responsibility (blog post vs display)
    //! - Open/Closed (customer discount tiers)
    //! - Liskov Substitution (shapes, payment processors)
    //! - Interface Segregation (printer capabilities, posting rights)
    //! - Dependency Inversion (swappable storage backends)
    //!
    //! ## OOP Fundamentals
    //! - Encapsulation (bank account with guarded balance)
    //! - Inheritance (behavior sharing via trait default methods)
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p3_abstract_factory
    //! cargo run --bin s2_open_closed
    //! cargo run --bin o1_encapsulation
    //! ```
}
