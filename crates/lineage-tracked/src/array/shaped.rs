//! `Shaped<T>`: a dense, row-major, N-dimensional container.

use lineage_core::errors::ShapeError;

/// Dense N-dimensional storage in row-major (last axis fastest) order.
#[derive(Debug, Clone, PartialEq)]
pub struct Shaped<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

fn element_count(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}

impl<T> Shaped<T> {
    /// Build from a shape and row-major data. The data length must equal
    /// the product of the shape (1 for a zero-dimensional shape).
    pub fn from_shape_vec(shape: impl Into<Vec<usize>>, data: Vec<T>) -> Result<Self, ShapeError> {
        let shape = shape.into();
        let expected = element_count(&shape).ok_or_else(|| ShapeError::TooLarge {
            shape: shape.clone(),
        })?;
        if data.len() != expected {
            return Err(ShapeError::LengthMismatch {
                shape,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Build by calling `f` with every coordinate in row-major order.
    pub fn from_shape_fn<F>(shape: impl Into<Vec<usize>>, mut f: F) -> Result<Self, ShapeError>
    where
        F: FnMut(&[usize]) -> T,
    {
        let shape = shape.into();
        let expected = element_count(&shape).ok_or_else(|| ShapeError::TooLarge {
            shape: shape.clone(),
        })?;
        let mut data = Vec::with_capacity(expected);
        for coordinate in Coordinates::new(&shape) {
            data.push(f(&coordinate));
        }
        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn offset(&self, coordinate: &[usize]) -> Result<usize, ShapeError> {
        let out_of_bounds = || ShapeError::OutOfBounds {
            coordinate: coordinate.to_vec(),
            shape: self.shape.clone(),
        };
        if coordinate.len() != self.shape.len() {
            return Err(out_of_bounds());
        }
        let mut offset = 0;
        for (&index, &dim) in coordinate.iter().zip(&self.shape) {
            if index >= dim {
                return Err(out_of_bounds());
            }
            offset = offset * dim + index;
        }
        Ok(offset)
    }

    pub fn get(&self, coordinate: &[usize]) -> Result<&T, ShapeError> {
        let offset = self.offset(coordinate)?;
        Ok(&self.data[offset])
    }

    pub fn get_mut(&mut self, coordinate: &[usize]) -> Result<&mut T, ShapeError> {
        let offset = self.offset(coordinate)?;
        Ok(&mut self.data[offset])
    }

    /// Every valid coordinate, row-major.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(&self.shape)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// `(coordinate, element)` pairs, row-major.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (Vec<usize>, &T)> {
        Coordinates::new(&self.shape).zip(self.data.iter())
    }

    pub fn indexed_iter_mut(&mut self) -> impl Iterator<Item = (Vec<usize>, &mut T)> {
        Coordinates::new(&self.shape).zip(self.data.iter_mut())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn map<U, F>(&self, f: F) -> Shaped<U>
    where
        F: FnMut(&T) -> U,
    {
        Shaped {
            shape: self.shape.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Fallible map that also sees each element's coordinate. Stops at the
    /// first error.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<Shaped<U>, E>
    where
        F: FnMut(&[usize], &T) -> Result<U, E>,
    {
        let data = self
            .indexed_iter()
            .map(|(coordinate, element)| f(&coordinate, element))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Shaped {
            shape: self.shape.clone(),
            data,
        })
    }
}

/// Row-major coordinate iterator.
///
/// A zero-dimensional shape yields the single empty coordinate; a shape with
/// any zero-length axis yields nothing.
#[derive(Debug, Clone)]
pub struct Coordinates {
    shape: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl Coordinates {
    pub fn new(shape: &[usize]) -> Self {
        let next = if shape.contains(&0) {
            None
        } else {
            Some(vec![0; shape.len()])
        };
        Self {
            shape: shape.to_vec(),
            next,
        }
    }
}

impl Iterator for Coordinates {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        for axis in (0..successor.len()).rev() {
            successor[axis] += 1;
            if successor[axis] < self.shape[axis] {
                self.next = Some(successor);
                break;
            }
            successor[axis] = 0;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_are_row_major() {
        let coords: Vec<_> = Coordinates::new(&[2, 3]).collect();
        assert_eq!(
            coords,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn degenerate_shapes() {
        assert_eq!(Coordinates::new(&[]).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(Coordinates::new(&[3, 0, 2]).count(), 0);
        let scalar = Shaped::from_shape_vec(Vec::<usize>::new(), vec![5]).unwrap();
        assert_eq!(scalar.get(&[]), Ok(&5));
    }

    #[test]
    fn construction_checks_length() {
        assert_eq!(
            Shaped::from_shape_vec([2, 2], vec![1, 2, 3]),
            Err(ShapeError::LengthMismatch {
                shape: vec![2, 2],
                expected: 4,
                actual: 3,
            })
        );
        assert!(matches!(
            Shaped::<u8>::from_shape_vec([usize::MAX, 2], vec![]),
            Err(ShapeError::TooLarge { .. })
        ));
    }

    #[test]
    fn indexing_is_bounds_checked() {
        let mut grid = Shaped::from_shape_fn([2, 2], |c| c[0] * 10 + c[1]).unwrap();
        assert_eq!(grid.get(&[1, 0]), Ok(&10));
        *grid.get_mut(&[0, 1]).unwrap() = 99;
        assert_eq!(grid.as_slice(), &[0, 99, 10, 11]);
        assert!(matches!(grid.get(&[2, 0]), Err(ShapeError::OutOfBounds { .. })));
        assert!(matches!(grid.get(&[0]), Err(ShapeError::OutOfBounds { .. })));
    }

    #[test]
    fn try_map_short_circuits() {
        let grid = Shaped::from_shape_vec([3], vec![1, 0, 2]).unwrap();
        let mut calls = 0;
        let result: Result<Shaped<i32>, String> = grid.try_map(|_, &x| {
            calls += 1;
            if x == 0 { Err("zero".into()) } else { Ok(10 / x) }
        });
        assert_eq!(result, Err("zero".to_string()));
        assert_eq!(calls, 2);
    }
}
