#![deny(missing_docs)]
//! Interface crate to unify how the hashing work of tree operations is
//! reported alongside their results.

mod context;

use std::ops::{Add, AddAssign};

pub use context::{CostContext, CostResult, CostsExt};

/// Piece of data representing the hashing work an operation performed.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct OperationCost {
    /// How many times a pair of nodes was hashed into a parent.
    pub hash_node_calls: u32,
    /// How many bytes were fed into the hash primitive.
    pub hash_byte_calls: u64,
    /// How many nodes were allocated.
    pub nodes_created: u32,
}

impl OperationCost {
    /// Helper function to build default `OperationCost` with different
    /// `hash_node_calls`.
    pub fn with_hash_node_calls(hash_node_calls: u32) -> Self {
        OperationCost {
            hash_node_calls,
            ..Default::default()
        }
    }

    /// Helper function to build default `OperationCost` with different
    /// `hash_byte_calls`.
    pub fn with_hash_byte_calls(hash_byte_calls: u64) -> Self {
        OperationCost {
            hash_byte_calls,
            ..Default::default()
        }
    }

    /// Helper function to build default `OperationCost` with different
    /// `nodes_created`.
    pub fn with_nodes_created(nodes_created: u32) -> Self {
        OperationCost {
            nodes_created,
            ..Default::default()
        }
    }

    /// Returns `true` if no work was recorded.
    pub fn is_nothing(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for OperationCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        OperationCost {
            hash_node_calls: self.hash_node_calls + rhs.hash_node_calls,
            hash_byte_calls: self.hash_byte_calls + rhs.hash_byte_calls,
            nodes_created: self.nodes_created + rhs.nodes_created,
        }
    }
}

impl AddAssign for OperationCost {
    fn add_assign(&mut self, rhs: Self) {
        self.hash_node_calls += rhs.hash_node_calls;
        self.hash_byte_calls += rhs.hash_byte_calls;
        self.nodes_created += rhs.nodes_created;
    }
}

/// Macro to achieve a kind of what `?` operator does, but with `CostContext` on
/// top. It is intended for a plain `Result`, so no costs will be added except
/// previously accumulated.
#[macro_export]
macro_rules! cost_return_on_error_no_add {
    ( $cost:expr, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result = { $($body)+ };
            match result {
                Ok(x) => x,
                Err(e) => return Err(e).wrap_with_cost($cost),
            }
        }
    };
}
