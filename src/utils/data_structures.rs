//! this module contains the dense storage used by the distance tables

use std::ops::Add;

/// stores a 2d matrix inside a single 1d array
#[derive(Clone, Debug)]
pub struct Matrix<T: Clone + Copy + PartialEq + Add<Output = T>> {
    data: Vec<T>,

    rows: usize,
    cols: usize,
}

impl<T: Clone + Copy + PartialEq + Add<Output = T>> Matrix<T> {

    pub fn new(rows: usize, cols: usize, initial_value: T) -> Self {
        Matrix {
            data: vec![initial_value; rows * cols],
            rows,
            cols
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// adds the given value onto the current entry
    pub fn add_value(&mut self, row: usize, col: usize, value: T) {
        let current_value = &mut self.data[row * self.cols + col];
        *current_value = *current_value + value;
    }

    /// overwrites every entry of the main diagonal
    pub fn fill_diagonal(&mut self, value: T) {
        for index in 0..self.rows.min(self.cols) {
            self.set(index, index, value);
        }
    }

    /// returns a new square matrix holding self + self^T
    pub fn add_transposed(&self) -> Self {
        let mut result = self.clone();

        for row in 0..self.rows {
            for col in 0..self.cols {
                result.set(row, col, self.get(row, col) + self.get(col, row));
            }
        }

        result
    }

    pub fn is_symmetric(&self) -> bool {
        if self.rows != self.cols {
            return false;
        }

        for row in 0..self.rows {
            for col in (row + 1)..self.cols {
                if self.get(row, col) != self.get(col, row) {
                    return false;
                }
            }
        }

        true
    }
}

impl<T: Clone + Copy + PartialEq + Add<Output = T>> PartialEq for Matrix<T> {

    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.rows == other.rows && self.cols == other.cols
    }
}
