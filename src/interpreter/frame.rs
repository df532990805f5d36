use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// A lexical scope frame.
///
/// A frame is a mutable binding table plus an optional link to an enclosing
/// frame, forming the lexical scoping chain. Frames are shared,
/// mutably-extensible records: cloning a `Frame` clones the handle, not the
/// bindings, so a closure that captures a frame observes bindings added to
/// it later. This is what lets a named function call itself: the function
/// value is stored into the very frame its closure captured.
///
/// Chains never cycle: a child frame only ever links to a pre-existing
/// parent at creation time.
#[derive(Clone, Default)]
pub struct Frame {
    inner: Rc<RefCell<FrameInner>>,
}

#[derive(Default)]
struct FrameInner {
    bindings: HashMap<String, Value>,
    parent:   Option<Frame>,
}

impl Frame {
    /// Creates a new top-level frame with no parent and no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a binding in this frame.
    ///
    /// Only this frame is touched; enclosing frames are never modified.
    ///
    /// # Example
    /// ```
    /// use lambra::interpreter::{frame::Frame, value::Value};
    ///
    /// let frame = Frame::new();
    /// frame.define("x", Value::Integer(5));
    ///
    /// assert_eq!(frame.lookup("x", 1).unwrap(), Value::Integer(5));
    /// ```
    pub fn define(&self, name: &str, value: Value) {
        self.inner
            .borrow_mut()
            .bindings
            .insert(name.to_string(), value);
    }

    /// Returns the value bound to `name` in the nearest enclosing frame.
    ///
    /// The lookup walks the parent chain until the name is found or the
    /// chain is exhausted.
    ///
    /// # Parameters
    /// - `name`: The name to resolve.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedIdentifier`] when no frame in the
    /// chain binds the name.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        let inner = self.inner.borrow();
        if let Some(value) = inner.bindings.get(name) {
            return Ok(value.clone());
        }
        match &inner.parent {
            Some(parent) => parent.lookup(name, line),
            None => Err(RuntimeError::UndefinedIdentifier { name: name.to_string(),
                                                           line }),
        }
    }

    /// Creates a child frame binding each name to the corresponding value.
    ///
    /// The child's parent is `self`; the parent is never mutated. Callers
    /// are responsible for matching name and value counts (named
    /// application checks arity first; curried application always extends
    /// with exactly one pair).
    #[must_use]
    pub fn extend(&self, names: &[String], values: Vec<Value>) -> Self {
        let child = Self { inner: Rc::new(RefCell::new(FrameInner { bindings: HashMap::new(),
                                                                    parent:   Some(self.clone()), })), };
        for (name, value) in names.iter().zip(values) {
            child.define(name, value);
        }
        child
    }
}
