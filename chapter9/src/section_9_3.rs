//! Section 9.3: A First Look at Classes
//!
//! Python classes are created at runtime, keep every member public, and
//! dispatch every method virtually. The Rust mapping trades that dynamism
//! for compile-time structure:
//!
//! | Python                               | Rust                              |
//! |--------------------------------------|-----------------------------------|
//! | `class C:` with methods              | `struct C` + `impl C`             |
//! | explicit `self` first argument       | explicit `&self` / `&mut self`    |
//! | `_name` privacy convention           | private fields, enforced          |
//! | `@dataclass` code generation         | `#[derive(...)]` macros           |
//! | duck typing ("has read()/readline()")| a trait, dispatched via `dyn`     |
//! | aliasing mutable arguments           | `&mut` borrows, visible to caller |
//!
//! Where Python says "aliases behave like pointers and a callee's mutation
//! is seen by the caller", Rust says the same thing with an `&mut` borrow,
//! except the compiler tracks who may mutate when.

use serde::{Deserialize, Serialize};

// =============================================================================
// 9.3.2: Data bundling - the dataclass
// =============================================================================

/// A record type bundling a few named data items, the `struct`-like use of
/// classes.
///
/// The derives play the role of `@dataclass`: constructor-adjacent
/// boilerplate, comparisons, and a readable debug form are generated rather
/// than hand-written. The serde derives extend the same idea to
/// (de)serialization.
///
/// # Python equivalent
/// ```python
/// @dataclass
/// class Employee:
///     name: str
///     dept: str
///     salary: int
/// ```
///
/// # Example
/// ```
/// use pytut_chapter9::section_9_3::Employee;
/// let john = Employee::new("John", "Computer Lab", 1000);
/// assert_eq!(john.dept, "Computer Lab");
/// assert_eq!(john.salary, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub dept: String,
    pub salary: u32,
}

impl Employee {
    pub fn new(name: impl Into<String>, dept: impl Into<String>, salary: u32) -> Self {
        Employee {
            name: name.into(),
            dept: dept.into(),
            salary,
        }
    }
}

// =============================================================================
// 9.3.5: Methods, privacy, and mutation seen by the caller
// =============================================================================

/// A class with state, methods, and non-public members.
///
/// Python only has the `_name` convention ("treat this as an implementation
/// detail"); Rust enforces the same intent with field privacy, so the
/// member list is readable only through the methods below. `add` takes
/// `&mut self` - the explicit form of "if a function modifies an object
/// passed as an argument, the caller will see the change".
#[derive(Debug, Clone)]
pub struct Department {
    name: String,
    members: Vec<Employee>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Department {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hires an employee into this department.
    pub fn add(&mut self, employee: Employee) {
        self.members.push(employee);
    }

    pub fn headcount(&self) -> usize {
        self.members.len()
    }

    /// Total salary of the department, an ordinary read-only method.
    pub fn payroll(&self) -> u64 {
        self.members.iter().map(|e| u64::from(e.salary)).sum()
    }
}

// =============================================================================
// 9.3.x: Duck typing as a trait
// =============================================================================

/// The tutorial's aside: code expecting a file object can be handed any
/// class with `read()` and `readline()` methods. In Rust the "any class
/// with these methods" set gets a name.
pub trait LineSource {
    /// Produces the next line, or `None` when the source is drained.
    fn read_line(&mut self) -> Option<String>;

    /// Produces everything left in the source as one string.
    fn read(&mut self) -> String {
        let mut out = String::new();
        while let Some(line) = self.read_line() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// A string buffer standing in for a file, the tutorial's example of a
/// duck-typed substitute.
pub struct StringSource {
    lines: Vec<String>,
    index: usize,
}

impl StringSource {
    pub fn new(text: &str) -> Self {
        StringSource {
            lines: text.lines().map(str::to_string).collect(),
            index: 0,
        }
    }
}

impl LineSource for StringSource {
    fn read_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.index).cloned();
        if line.is_some() {
            self.index += 1;
        }
        line
    }
}

/// Formats data from *any* line source - the function that motivated the
/// duck typing. `dyn` makes the "all methods are virtual" dispatch of
/// Python explicit and opt-in.
pub fn format_report(source: &mut dyn LineSource) -> String {
    let mut out = String::new();
    let mut number = 1;
    while let Some(line) = source.read_line() {
        out.push_str(&format!("{number:>3}  {line}\n"));
        number += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dataclass_field_access() {
        let john = Employee::new("John", "Computer Lab", 1000);
        assert_eq!(john.name, "John");
        assert_eq!(john.dept, "Computer Lab");
        assert_eq!(john.salary, 1000);
    }

    #[test]
    fn test_dataclass_equality_and_clone() {
        let a = Employee::new("Ada", "Research", 2000);
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Employee::new("Ada", "Research", 2001));
    }

    #[test]
    fn test_dataclass_serializes_like_its_fields() {
        let john = Employee::new("John", "Computer Lab", 1000);
        let value = serde_json::to_value(&john).unwrap();
        assert_eq!(
            value,
            json!({"name": "John", "dept": "Computer Lab", "salary": 1000})
        );
        let back: Employee = serde_json::from_value(value).unwrap();
        assert_eq!(back, john);
    }

    #[test]
    fn test_mutation_is_seen_by_the_caller() {
        let mut lab = Department::new("Computer Lab");

        fn hire(dept: &mut Department, employee: Employee) {
            dept.add(employee);
        }

        hire(&mut lab, Employee::new("John", "Computer Lab", 1000));
        hire(&mut lab, Employee::new("Ada", "Computer Lab", 1500));

        assert_eq!(lab.name(), "Computer Lab");
        assert_eq!(lab.headcount(), 2);
        assert_eq!(lab.payroll(), 2500);
    }

    #[test]
    fn test_duck_typed_source() {
        let mut source = StringSource::new("alpha\nbeta\ngamma");
        let report = format_report(&mut source);
        assert_eq!(report, "  1  alpha\n  2  beta\n  3  gamma\n");

        // Drained source keeps returning None
        assert_eq!(source.read_line(), None);
    }

    #[test]
    fn test_read_returns_the_rest() {
        let mut source = StringSource::new("one\ntwo\nthree");
        assert_eq!(source.read_line(), Some("one".to_string()));
        assert_eq!(source.read(), "two\nthree\n");
        assert_eq!(source.read(), "");
    }
}
