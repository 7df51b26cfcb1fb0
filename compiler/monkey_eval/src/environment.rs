//! Lexical environments.
//!
//! A scope owns its bindings and holds a shared reference to its parent.
//! Every function call opens a child of the scope the function was *defined*
//! in, so a returned closure keeps its defining scope alive for as long as
//! the closure itself is reachable.
//!
//! Writes only ever land in the local scope: there is no assignment to an
//! outer binding, only shadowing.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::object::Object;

/// A single-threaded, reference-counted cell.
///
/// All scope allocations go through [`LocalScope::new`]. Not `Send`: an
/// environment belongs to exactly one evaluation session.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope plus the link to its enclosing scope.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Object>,
    parent: Option<Environment>,
}

impl Scope {
    #[inline]
    fn lookup(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|parent| parent.get(name))
    }
}

/// Handle to a scope. Cloning shares the scope; it does not copy it.
#[derive(Clone, Default)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A root scope with no parent.
    pub fn new_root() -> Self {
        Environment::default()
    }

    /// A fresh child scope whose lookups fall back to `outer`.
    pub fn extend(outer: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(outer.clone()),
            }),
        }
    }

    /// Look `name` up here, then in each enclosing scope in turn.
    pub fn get(&self, name: &str) -> Option<Object> {
        self.scope.borrow().lookup(name)
    }

    /// Bind `name` in this scope, shadowing any outer binding. Returns the value.
    pub fn set(&self, name: impl Into<String>, value: Object) -> Object {
        self.scope
            .borrow_mut()
            .bindings
            .insert(name.into(), value.clone());
        value
    }

    /// Whether `name` is bound in this scope itself, ignoring parents.
    pub fn contains_local(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

// Bindings are not printed: a closure stored in the scope it captured would
// make the output cyclic.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}
