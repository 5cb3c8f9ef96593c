//! Position based selection over ordered sequences.
//!
//! Every operation returns a new `Vec`; the source slice is never mutated. Index lists carry
//! the identity of the element they were taken from, which is how per-instance data survives
//! being split into sub-batches and merged back.

use std::collections::HashMap;

pub fn filled<T: Clone>(value: T, length: usize) -> Vec<T> {
    vec![value; length]
}

pub fn flattened<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    nested.iter().flatten().cloned().collect()
}

/// Starts from `length` copies of `value`, then writes each disjoint `(indices, values)` pair
/// over it. Each pair is zipped, so surplus indices or values are ignored, as are indices past
/// `length`.
pub fn disjoint_unioned<T, I, V>(value: T, length: usize, pairs: I) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = (Vec<usize>, V)>,
    V: IntoIterator<Item = T>,
{
    let replace_map: HashMap<usize, T> = pairs
        .into_iter()
        .flat_map(|(indices, values)| indices.into_iter().zip(values))
        .collect();

    filled(value, length).replaced(&replace_map)
}

pub trait IndexExt<T> {
    fn to_indices(&self) -> Vec<usize>;

    fn to_even_indices(&self) -> Vec<usize>;

    fn to_odd_indices(&self) -> Vec<usize>;

    fn to_conditional_indices<P>(&self, condition: P) -> Vec<usize>
    where
        P: Fn(&T) -> bool;

    /// Picks elements in the order given by `indices`. Out of range indices are skipped.
    fn indexed(&self, indices: &[usize]) -> Vec<T>;

    fn even_indexed(&self) -> Vec<T>;

    fn odd_indexed(&self) -> Vec<T>;

    fn conditioned<P>(&self, condition: P) -> Vec<T>
    where
        P: Fn(&T) -> bool;

    fn wrapped(&self) -> Vec<Vec<T>>;

    fn replaced(&self, replace_map: &HashMap<usize, T>) -> Vec<T>;
}

impl<T: Clone> IndexExt<T> for [T] {
    fn to_indices(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }

    fn to_even_indices(&self) -> Vec<usize> {
        (0..self.len()).step_by(2).collect()
    }

    fn to_odd_indices(&self) -> Vec<usize> {
        (1..self.len()).step_by(2).collect()
    }

    fn to_conditional_indices<P>(&self, condition: P) -> Vec<usize>
    where
        P: Fn(&T) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|(_, x)| condition(x))
            .map(|(i, _)| i)
            .collect()
    }

    fn indexed(&self, indices: &[usize]) -> Vec<T> {
        indices.iter().filter_map(|&i| self.get(i).cloned()).collect()
    }

    fn even_indexed(&self) -> Vec<T> {
        self.indexed(&self.to_even_indices())
    }

    fn odd_indexed(&self) -> Vec<T> {
        self.indexed(&self.to_odd_indices())
    }

    fn conditioned<P>(&self, condition: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.indexed(&self.to_conditional_indices(condition))
    }

    fn wrapped(&self) -> Vec<Vec<T>> {
        self.iter().map(|x| vec![x.clone()]).collect()
    }

    fn replaced(&self, replace_map: &HashMap<usize, T>) -> Vec<T> {
        self.iter()
            .enumerate()
            .map(|(i, x)| replace_map.get(&i).unwrap_or(x).clone())
            .collect()
    }
}
