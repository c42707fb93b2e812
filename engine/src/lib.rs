//! # Cutlass Engine Library
//!
//! Contract between the Cutlass preferences layer and the disassembly engine's
//! own option namespace, plus a process-local engine implementation.
//!
//! The engine owns options addressed by dotted keys (`asm.xrefs`,
//! `asm.cmt.col`, ...) and a current color scheme. The preferences layer talks
//! to it exclusively through [`Directive`]s and typed reads.
//!
//! ## Modules
//!
//! - [`color`] - RGBA color value shared by schemes and the settings store
//! - [`directive`] - Commands issued to the engine
//! - [`errors`] - Engine error type
//! - [`memory`] - In-memory engine with built-in and custom color schemes
//! - [`scheme`] - Color scheme mapping and the bundled schemes
//! - [`value`] - Typed option values and their coercions

pub mod color;
pub mod directive;
pub mod errors;
pub mod memory;
pub mod scheme;
pub mod value;

pub use color::Rgba;
pub use directive::Directive;
pub use errors::{EngineError, EngineResult};
pub use memory::InMemoryEngine;
pub use scheme::ColorScheme;
pub use value::{ConfigValue, ValueKind};

/// Option namespace of the disassembly engine.
///
/// Implementations are process-local and single-threaded; every call completes
/// before returning. Typed reads never fail: unknown keys read as the neutral
/// value of the requested type.
pub trait OptionEngine {
    /// Execute a directive against the engine.
    fn execute(&mut self, directive: Directive) -> EngineResult<()>;

    fn get_bool(&self, key: &str) -> bool;

    fn get_int(&self, key: &str) -> i64;

    fn get_string(&self, key: &str) -> String;

    /// Current color scheme as a JSON object mapping color names to
    /// `[r, g, b, a]` arrays.
    fn color_scheme(&self) -> serde_json::Value;

    /// Whether `name` refers to a user-defined scheme rather than a bundled one.
    fn is_custom_scheme(&self, name: &str) -> bool;

    /// Convenience wrapper around [`Directive::SetOption`].
    fn set_config(&mut self, key: &str, value: ConfigValue) -> EngineResult<()> {
        self.execute(Directive::SetOption {
            key: key.to_string(),
            value,
        })
    }
}

/// A shared engine handle forwards to the engine it wraps.
impl<T: OptionEngine + ?Sized> OptionEngine for std::rc::Rc<std::cell::RefCell<T>> {
    fn execute(&mut self, directive: Directive) -> EngineResult<()> {
        self.borrow_mut().execute(directive)
    }

    fn get_bool(&self, key: &str) -> bool {
        self.borrow().get_bool(key)
    }

    fn get_int(&self, key: &str) -> i64 {
        self.borrow().get_int(key)
    }

    fn get_string(&self, key: &str) -> String {
        self.borrow().get_string(key)
    }

    fn color_scheme(&self) -> serde_json::Value {
        self.borrow().color_scheme()
    }

    fn is_custom_scheme(&self, name: &str) -> bool {
        self.borrow().is_custom_scheme(name)
    }
}
