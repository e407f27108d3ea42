use ndarray::Array2;
use num_traits::Zero;

use crate::sparse::{CsrMatrix, IndexError};

/// Column-major compressed sparse matrix.
///
/// Mirror of [`CsrMatrix`] with the roles of rows and columns swapped:
/// `indptr[c]..indptr[c+1]` delimits column `c`, and `indices` holds row ids
/// sorted within each column. Column subsetting is a segment copy here, which
/// is why label-axis slicing converts through this form.
#[derive(Clone, Debug, PartialEq)]
pub struct CscMatrix<T> {
    nrows: usize,
    ncols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<T>,
}

impl<T> CscMatrix<T> {
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Row indices and values of the stored entries of `col`, in row order.
    pub fn col(&self, col: usize) -> (&[usize], &[T]) {
        assert!(col < self.ncols, "column index out of bounds");
        let start = self.indptr[col];
        let end = self.indptr[col + 1];
        (&self.indices[start..end], &self.data[start..end])
    }

    pub(crate) fn from_parts(
        nrows: usize,
        ncols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<T>,
    ) -> Self {
        debug_assert_eq!(indptr.len(), ncols + 1);
        debug_assert_eq!(indices.len(), data.len());
        Self {
            nrows,
            ncols,
            indptr,
            indices,
            data,
        }
    }
}

impl<T> CscMatrix<T>
where
    T: Clone + Zero + PartialEq,
{
    /// Sub-matrix induced by `cols`, order-preserved. Duplicate indices are
    /// allowed and produce duplicate columns.
    pub fn select_columns(&self, cols: &[usize]) -> Result<Self, IndexError> {
        let mut indptr = Vec::with_capacity(cols.len() + 1);
        indptr.push(0);
        let mut indices = Vec::new();
        let mut data = Vec::new();
        for &c in cols {
            if c >= self.ncols {
                return Err(IndexError {
                    axis: "column",
                    index: c,
                    bound: self.ncols,
                });
            }
            let (rows, vals) = self.col(c);
            indices.extend_from_slice(rows);
            data.extend_from_slice(vals);
            indptr.push(indices.len());
        }
        Ok(Self::from_parts(self.nrows, cols.len(), indptr, indices, data))
    }

    /// Convert to row-major storage.
    pub fn to_csr(&self) -> CsrMatrix<T> {
        let mut row_counts = vec![0usize; self.nrows + 1];
        for &r in &self.indices {
            row_counts[r + 1] += 1;
        }
        for r in 0..self.nrows {
            row_counts[r + 1] += row_counts[r];
        }
        let indptr = row_counts.clone();
        let mut indices = vec![0usize; self.nnz()];
        let mut data = vec![T::zero(); self.nnz()];
        let mut next = row_counts;
        for c in 0..self.ncols {
            let (rows, vals) = self.col(c);
            for (r, v) in rows.iter().zip(vals.iter()) {
                let slot = next[*r];
                indices[slot] = c;
                data[slot] = v.clone();
                next[*r] += 1;
            }
        }
        CsrMatrix::from_parts(self.nrows, self.ncols, indptr, indices, data)
    }

    /// Dense `ndarray` copy.
    pub fn to_dense(&self) -> Array2<T> {
        let mut out = Array2::from_elem((self.nrows, self.ncols), T::zero());
        for c in 0..self.ncols {
            let (rows, vals) = self.col(c);
            for (r, v) in rows.iter().zip(vals.iter()) {
                out[(*r, c)] = v.clone();
            }
        }
        out
    }
}
