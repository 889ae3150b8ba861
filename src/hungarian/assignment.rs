//!
//! Assignment definitions
//!
use itertools::Itertools; // for join
use std::ops::Index;

/// Assignment definitions
///
/// Assignment a is a mapping from each row to the column `a[row]`.
/// For a solution of the n x n problem, it is a permutation of `0..n`.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct Assignment(Vec<usize>);

impl Assignment {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// column assigned to the row
    pub fn column_of(&self, row: usize) -> Option<usize> {
        self.0.get(row).copied()
    }
    /// row that the column is assigned to
    pub fn row_of(&self, column: usize) -> Option<usize> {
        self.0.iter().position(|&c| c == column)
    }
    /// iterate over `(row, column)` pairs in row order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().copied().enumerate()
    }
    ///
    /// Check if every column in `0..n` appears exactly once.
    ///
    pub fn is_permutation(&self) -> bool {
        let n = self.len();
        let mut seen = vec![false; n];
        self.0.iter().all(|&c| {
            if c >= n || seen[c] {
                false
            } else {
                seen[c] = true;
                true
            }
        })
    }
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for Assignment {
    fn from(columns: Vec<usize>) -> Assignment {
        Assignment(columns)
    }
}

impl Index<usize> for Assignment {
    type Output = usize;
    fn index(&self, row: usize) -> &usize {
        &self.0[row]
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|(row, column)| format!("{}->{}", row, column))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_basic() {
        let a = Assignment::from(vec![2, 0, 1]);
        assert_eq!(a.len(), 3);
        assert_eq!(a[0], 2);
        assert_eq!(a.column_of(1), Some(0));
        assert_eq!(a.column_of(3), None);
        assert_eq!(a.row_of(1), Some(2));
        assert_eq!(a.row_of(5), None);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![(0, 2), (1, 0), (2, 1)]);
        assert_eq!(a.to_string(), "0->2, 1->0, 2->1");
        assert!(a.is_permutation());
    }

    #[test]
    fn assignment_not_permutation() {
        assert!(!Assignment::from(vec![0, 0, 1]).is_permutation());
        assert!(!Assignment::from(vec![0, 3, 1]).is_permutation());
        assert!(Assignment::from(vec![]).is_permutation());
        assert!(Assignment::from(vec![]).is_empty());
    }
}
