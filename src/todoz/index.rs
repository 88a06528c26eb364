//! # Display Indexes
//!
//! Ids are UUIDs, which nobody wants to type. Listings number todos `1, 2, 3`
//! by their position in the full list (newest first), and commands accept
//! either that number or a prefix of the id.
//!
//! Indexes are canonical: a filtered listing shows each todo with the same
//! number it has in the unfiltered one, so `todoz list active` followed by
//! `todoz done 3` acts on the todo shown as `3`.

use crate::model::{Filter, Todo};
use std::fmt;
use std::str::FromStr;

/// Shortest id prefix accepted as a selector.
pub const MIN_ID_PREFIX: usize = 4;

/// A user input naming a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoSelector {
    /// 1-based position in the full list
    Index(usize),
    /// Full id or unique id prefix
    Id(String),
}

impl fmt::Display for TodoSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoSelector::Index(i) => write!(f, "{}", i),
            TodoSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for TodoSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Indexes start at 1".to_string());
            }
            return Ok(TodoSelector::Index(n));
        }
        if s.len() >= MIN_ID_PREFIX && s.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
            return Ok(TodoSelector::Id(s.to_ascii_lowercase()));
        }
        Err(format!("Invalid todo reference: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTodo {
    pub todo: Todo,
    pub index: usize,
}

/// Numbers every todo by its position, then keeps the ones `filter` shows.
pub fn index_todos<'a, I>(todos: I, filter: Filter) -> Vec<DisplayTodo>
where
    I: IntoIterator<Item = &'a Todo>,
{
    todos
        .into_iter()
        .enumerate()
        .filter(|(_, todo)| filter.matches(todo))
        .map(|(i, todo)| DisplayTodo {
            todo: todo.clone(),
            index: i + 1,
        })
        .collect()
}

/// Finds the id a selector refers to. Ambiguous prefixes resolve to nothing.
pub fn resolve<'a>(todos: &'a [Todo], selector: &TodoSelector) -> Option<&'a Todo> {
    match selector {
        TodoSelector::Index(n) => n.checked_sub(1).and_then(|i| todos.get(i)),
        TodoSelector::Id(prefix) => {
            if let Some(exact) = todos.iter().find(|t| &t.id == prefix) {
                return Some(exact);
            }
            let mut matches = todos.iter().filter(|t| t.id.starts_with(prefix.as_str()));
            match (matches.next(), matches.next()) {
                (Some(only), None) => Some(only),
                _ => None,
            }
        }
    }
}
