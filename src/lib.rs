//!
//! hungarian solves the [linear assignment problem](https://en.wikipedia.org/wiki/Assignment_problem)
//! of a square cost matrix by the Hungarian (Kuhn-Munkres) algorithm.
//!
//! ```
//! use hungarian::hungarian::min_cost_assignment;
//!
//! let (assignment, cost) = min_cost_assignment(vec![
//!     vec![4, 1, 3],
//!     vec![2, 0, 5],
//!     vec![3, 2, 2],
//! ])
//! .unwrap();
//! assert_eq!(cost, 5);
//! assert_eq!(assignment.into_vec(), vec![1, 0, 2]);
//! ```
//!
pub mod hungarian;
