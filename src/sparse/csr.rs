use ndarray::Array2;
use num_traits::Zero;

use crate::sparse::{CscMatrix, IndexError, ShapeError};

/// Row-major compressed sparse matrix.
///
/// Stored entries are kept sorted by column within each row; zero values are
/// never stored. `indptr` has `nrows + 1` entries and `indptr[r]..indptr[r+1]`
/// delimits row `r` in `indices`/`data`.
#[derive(Clone, Debug, PartialEq)]
pub struct CsrMatrix<T> {
    nrows: usize,
    ncols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<T>,
}

impl<T> CsrMatrix<T> {
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            indptr: vec![0; nrows + 1],
            indices: Vec::new(),
            data: Vec::new(),
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Column indices and values of the stored entries of `row`, in column order.
    pub fn row(&self, row: usize) -> (&[usize], &[T]) {
        assert!(row < self.nrows, "row index out of bounds");
        let start = self.indptr[row];
        let end = self.indptr[row + 1];
        (&self.indices[start..end], &self.data[start..end])
    }

    pub(crate) fn from_parts(
        nrows: usize,
        ncols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<T>,
    ) -> Self {
        debug_assert_eq!(indptr.len(), nrows + 1);
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

impl<T> CsrMatrix<T>
where
    T: Clone + Zero + PartialEq,
{
    /// Build from a dense row-major buffer, skipping zero entries.
    pub fn from_shape_vec(shape: (usize, usize), buf: Vec<T>) -> Result<Self, ShapeError> {
        let (nrows, ncols) = shape;
        if buf.len() != nrows * ncols {
            return Err(ShapeError {
                rows: nrows,
                cols: ncols,
                len: buf.len(),
            });
        }
        let mut out = Self::zeros(nrows, ncols);
        for (i, value) in buf.into_iter().enumerate() {
            if !value.is_zero() {
                out.indices.push(i % ncols);
                out.data.push(value);
                out.indptr[i / ncols + 1] += 1;
            }
        }
        for r in 0..nrows {
            out.indptr[r + 1] += out.indptr[r];
        }
        Ok(out)
    }

    /// Build from a dense `ndarray` matrix, skipping zero entries.
    pub fn from_dense(dense: &Array2<T>) -> Self {
        let (nrows, ncols) = dense.dim();
        let mut out = Self::zeros(nrows, ncols);
        for r in 0..nrows {
            for c in 0..ncols {
                let value = dense[(r, c)].clone();
                if !value.is_zero() {
                    out.indices.push(c);
                    out.data.push(value);
                }
            }
            out.indptr[r + 1] = out.data.len();
        }
        out
    }

    /// Build from (row, column, value) triplets. Later triplets overwrite
    /// earlier ones at the same position.
    pub fn from_triplets(
        shape: (usize, usize),
        entries: &[(usize, usize, T)],
    ) -> Result<Self, IndexError> {
        let mut out = Self::zeros(shape.0, shape.1);
        for (r, c, value) in entries {
            out.try_set(*r, *c, value.clone())?;
        }
        Ok(out)
    }

    /// Value at `(row, col)`, or zero if no entry is stored there.
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.nrows, "row index out of bounds");
        assert!(col < self.ncols, "column index out of bounds");
        let (cols, vals) = self.row(row);
        match cols.binary_search(&col) {
            Ok(pos) => vals[pos].clone(),
            Err(_) => T::zero(),
        }
    }

    /// Store `value` at `(row, col)`. A zero value removes the entry.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.try_set(row, col, value)
            .expect("index out of bounds in CsrMatrix::set");
    }

    fn try_set(&mut self, row: usize, col: usize, value: T) -> Result<(), IndexError> {
        if row >= self.nrows {
            return Err(IndexError {
                axis: "row",
                index: row,
                bound: self.nrows,
            });
        }
        if col >= self.ncols {
            return Err(IndexError {
                axis: "column",
                index: col,
                bound: self.ncols,
            });
        }
        let start = self.indptr[row];
        let end = self.indptr[row + 1];
        match self.indices[start..end].binary_search(&col) {
            Ok(pos) => {
                if value.is_zero() {
                    self.indices.remove(start + pos);
                    self.data.remove(start + pos);
                    for p in self.indptr[row + 1..].iter_mut() {
                        *p -= 1;
                    }
                } else {
                    self.data[start + pos] = value;
                }
            }
            Err(pos) => {
                if !value.is_zero() {
                    self.indices.insert(start + pos, col);
                    self.data.insert(start + pos, value);
                    for p in self.indptr[row + 1..].iter_mut() {
                        *p += 1;
                    }
                }
            }
        }
        Ok(())
    }

    /// Dense copy of a single row.
    pub fn row_to_dense(&self, row: usize) -> Vec<T> {
        let (cols, vals) = self.row(row);
        let mut out = vec![T::zero(); self.ncols];
        for (c, v) in cols.iter().zip(vals.iter()) {
            out[*c] = v.clone();
        }
        out
    }

    /// Sub-matrix induced by `rows`, order-preserved. Duplicate indices are
    /// allowed and produce duplicate rows.
    pub fn select_rows(&self, rows: &[usize]) -> Result<Self, IndexError> {
        let mut indptr = Vec::with_capacity(rows.len() + 1);
        indptr.push(0);
        let mut indices = Vec::new();
        let mut data = Vec::new();
        for &r in rows {
            if r >= self.nrows {
                return Err(IndexError {
                    axis: "row",
                    index: r,
                    bound: self.nrows,
                });
            }
            let (cols, vals) = self.row(r);
            indices.extend_from_slice(cols);
            data.extend_from_slice(vals);
            indptr.push(indices.len());
        }
        Ok(Self::from_parts(rows.len(), self.ncols, indptr, indices, data))
    }

    /// Sub-matrix induced by `cols`, order-preserved. Runs through the
    /// column-major form, where column subsetting is a segment copy.
    pub fn select_columns(&self, cols: &[usize]) -> Result<Self, IndexError> {
        Ok(self.to_csc().select_columns(cols)?.to_csr())
    }

    /// Vertical tiling: the whole matrix repeated `times` times, each copy
    /// occupying its own storage.
    pub fn repeat_rows(&self, times: usize) -> Self {
        let mut indptr = Vec::with_capacity(self.nrows * times + 1);
        indptr.push(0);
        let mut indices = Vec::with_capacity(self.nnz() * times);
        let mut data = Vec::with_capacity(self.nnz() * times);
        for _ in 0..times {
            for r in 0..self.nrows {
                let (cols, vals) = self.row(r);
                indices.extend_from_slice(cols);
                data.extend_from_slice(vals);
                indptr.push(indices.len());
            }
        }
        Self::from_parts(self.nrows * times, self.ncols, indptr, indices, data)
    }

    /// Convert to column-major storage.
    pub fn to_csc(&self) -> CscMatrix<T> {
        let mut col_counts = vec![0usize; self.ncols + 1];
        for &c in &self.indices {
            col_counts[c + 1] += 1;
        }
        for c in 0..self.ncols {
            col_counts[c + 1] += col_counts[c];
        }
        let indptr = col_counts.clone();
        let mut indices = vec![0usize; self.nnz()];
        let mut data = vec![T::zero(); self.nnz()];
        let mut next = col_counts;
        for r in 0..self.nrows {
            let (cols, vals) = self.row(r);
            for (c, v) in cols.iter().zip(vals.iter()) {
                let slot = next[*c];
                indices[slot] = r;
                data[slot] = v.clone();
                next[*c] += 1;
            }
        }
        CscMatrix::from_parts(self.nrows, self.ncols, indptr, indices, data)
    }

    /// Dense `ndarray` copy.
    pub fn to_dense(&self) -> Array2<T> {
        let mut out = Array2::from_elem((self.nrows, self.ncols), T::zero());
        for r in 0..self.nrows {
            let (cols, vals) = self.row(r);
            for (c, v) in cols.iter().zip(vals.iter()) {
                out[(r, *c)] = v.clone();
            }
        }
        out
    }
}
