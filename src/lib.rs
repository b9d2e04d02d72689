// Design Pattern Catalog
// Runnable, self-contained examples of the classic object-oriented patterns.

pub mod examples {
    //! # Design Pattern Catalog
    //!
    //! Each binary is a self-contained demonstration of one pattern:
    //!
    //! ## Pattern 1: Command
    //! - `Command` trait with a single `execute()`
    //! - Light and Fan receivers shared through `Rc<RefCell<_>>`
    //! - `RemoteControl` invoker with null-command-filled slots
    //!
    //! ## Pattern 2: Abstract Factory
    //! - `UiFactory` family (toolbox, layers, main windows)
    //! - Gtk and Qt concrete factories
    //! - Enum-selected zero-cost variant
    //!
    //! ## Pattern 3: Builder
    //! - `Director` running one construction process over part builders
    //! - Fluent consuming builder with `Result`-returning `build()`
    //!
    //! ## Pattern 4: Singleton
    //! - `OnceLock` initialization-once process state
    //! - `lazy_static` mutable registry behind a `Mutex`
    //!
    //! ## Pattern 5: Factory Method
    //! - Trait-object factory returning `Result` for unknown names
    //! - Enum variant with `FromStr`
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_command
    //! cargo run --bin p2_abstract_factory
    //! cargo run --bin p3_builder
    //! cargo run --bin p4_singleton
    //! cargo run --bin p5_factory_method
    //! ```
}
