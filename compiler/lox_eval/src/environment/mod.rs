//! Lexical environments.
//!
//! An [`Environment`] is one scope of name bindings plus a handle to the
//! scope that encloses it. Blocks, function bodies and lambda bodies each
//! get a fresh child environment chained to the one active where they were
//! entered. Closures keep the environment they were created in, so a scope
//! lives as long as the longest-lived closure or call frame holding it.
//!
//! Several closures may share one ancestor; an assignment through any of
//! them is visible to all. That aliasing is how captured mutable state
//! works, so environments are shared through [`LocalScope`] handles.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lox_ir::Token;
use rustc_hash::FxHashMap;

use crate::errors::{undefined_variable, EvalError};
use crate::Value;

/// Single-threaded shared handle with interior mutability.
///
/// Wraps `Rc<RefCell<T>>` so every scope allocation goes through
/// [`LocalScope::new`]. Not `Send`: a host driving the interpreter from
/// several threads must give each thread its own environment chain.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this scope.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> fmt::Debug for LocalScope<T> {
    /// Opaque: environments can reach themselves through closures they hold.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalScope({:p})", Rc::as_ptr(&self.0))
    }
}

/// Shared handle to an environment.
pub type SharedEnv = LocalScope<Environment>;

/// One scope of bindings.
#[derive(Default)]
pub struct Environment {
    values: FxHashMap<String, Value>,
    enclosing: Option<SharedEnv>,
}

impl Environment {
    /// A top-level scope with no parent.
    pub fn new() -> Self {
        Environment::default()
    }

    /// A scope nested inside `enclosing`.
    pub fn with_enclosing(enclosing: SharedEnv) -> Self {
        Environment {
            values: FxHashMap::default(),
            enclosing: Some(enclosing),
        }
    }

    /// Allocate a fresh child of `enclosing` behind a shared handle.
    pub fn child_of(enclosing: &SharedEnv) -> SharedEnv {
        LocalScope::new(Environment::with_enclosing(enclosing.clone()))
    }

    pub fn enclosing(&self) -> Option<&SharedEnv> {
        self.enclosing.as_ref()
    }

    /// Bind `name` in this scope, replacing any existing binding here.
    ///
    /// Never touches enclosing scopes, so a redefinition shadows.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Find `name`, searching from this scope outward.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        self.enclosing
            .as_ref()
            .and_then(|parent| parent.borrow().lookup(name))
    }

    /// Read the variable named by `name`.
    pub fn get(&self, name: &Token) -> Result<Value, EvalError> {
        self.lookup(&name.lexeme)
            .ok_or_else(|| undefined_variable(name))
    }

    /// Overwrite the nearest existing binding of `name`.
    ///
    /// Assignment never creates a binding; an unbound name is an error.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), EvalError> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }
        match &self.enclosing {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(undefined_variable(name)),
        }
    }

    /// Whether `name` is bound directly in this scope.
    pub fn contains_local(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of scopes from this one out to the outermost, inclusive.
    pub fn depth(&self) -> usize {
        match &self.enclosing {
            Some(parent) => 1 + parent.borrow().depth(),
            None => 1,
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests;
