//! Cartesian product over a family of finite sequences.

/// Lazy, finite, restartable enumeration of every combination across the
/// input sequences. The first sequence varies slowest, matching the input
/// order as the tie-break for enumeration order.
///
/// The iterator is `Clone`, so a fresh enumeration can be restarted from a
/// saved copy at any point.
///
/// # Examples
///
/// ```
/// use matriz::primitives::cartesian_product;
///
/// let combos: Vec<Vec<i32>> = cartesian_product(&[vec![1, 2], vec![3, 4]]).collect();
/// assert_eq!(combos, vec![vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4]]);
/// ```
#[must_use]
pub fn cartesian_product<T: Clone>(sequences: &[Vec<T>]) -> CartesianProduct<T> {
    CartesianProduct {
        sequences: sequences.to_vec(),
        indices: vec![0; sequences.len()],
        exhausted: sequences.iter().any(Vec::is_empty),
    }
}

/// Iterator returned by [`cartesian_product`].
///
/// Zero input sequences yield a single empty combination.
#[derive(Debug, Clone)]
pub struct CartesianProduct<T> {
    sequences: Vec<Vec<T>>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl<T: Clone> Iterator for CartesianProduct<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }

        let combo: Vec<T> = self
            .indices
            .iter()
            .zip(self.sequences.iter())
            .map(|(&i, seq)| seq[i].clone())
            .collect();

        // Odometer step: last index varies fastest.
        self.exhausted = true;
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.sequences[pos].len() {
                self.exhausted = false;
                break;
            }
            self.indices[pos] = 0;
        }

        Some(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sequences_order() {
        let combos: Vec<Vec<i32>> = cartesian_product(&[vec![1, 2], vec![3, 4, 5]]).collect();
        assert_eq!(
            combos,
            vec![
                vec![1, 3],
                vec![1, 4],
                vec![1, 5],
                vec![2, 3],
                vec![2, 4],
                vec![2, 5],
            ]
        );
    }

    #[test]
    fn test_three_sequences_count() {
        let combos: Vec<Vec<f64>> =
            cartesian_product(&[vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0, 6.0]]).collect();
        assert_eq!(combos.len(), 6);
        assert_eq!(combos[0], vec![1.0, 3.0, 4.0]);
        assert_eq!(combos[5], vec![2.0, 3.0, 6.0]);
    }

    #[test]
    fn test_empty_sequence_yields_nothing() {
        let combos: Vec<Vec<i32>> = cartesian_product(&[vec![1, 2], vec![]]).collect();
        assert!(combos.is_empty());
    }

    #[test]
    fn test_no_sequences_yields_single_empty() {
        let seqs: &[Vec<i32>] = &[];
        let combos: Vec<Vec<i32>> = cartesian_product(seqs).collect();
        assert_eq!(combos, vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_restartable_via_clone() {
        let mut iter = cartesian_product(&[vec![1, 2], vec![3, 4]]);
        let saved = iter.clone();
        assert_eq!(iter.next(), Some(vec![1, 3]));
        assert_eq!(iter.next(), Some(vec![1, 4]));

        let restarted: Vec<Vec<i32>> = saved.collect();
        assert_eq!(restarted.len(), 4);
        assert_eq!(restarted[0], vec![1, 3]);
    }

    #[test]
    fn test_single_sequence() {
        let combos: Vec<Vec<i32>> = cartesian_product(&[vec![7, 8, 9]]).collect();
        assert_eq!(combos, vec![vec![7], vec![8], vec![9]]);
    }
}
