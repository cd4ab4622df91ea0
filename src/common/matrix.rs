use crate::core::marker::EdgeType;

#[allow(clippy::len_without_is_empty)]
pub trait MatrixResize<E>: Default + IntoIterator<Item = Option<E>> {
    fn with_capacity(capacity: usize) -> Self;
    fn resize_with_none(&mut self, new_len: usize);
    fn push(&mut self, value: Option<E>);
    fn len(&self) -> usize;
}

pub fn size_of<Ty: EdgeType>(capacity: usize) -> usize {
    if Ty::is_directed() {
        capacity * capacity
    } else {
        capacity * (capacity + 1) / 2
    }
}

pub fn resize<E, Ty: EdgeType, M: MatrixResize<E>>(
    prev: &mut M,
    prev_capacity: usize,
    capacity: usize,
) {
    let prev_len = prev.len();
    let len = size_of::<Ty>(capacity);

    if len <= prev_len {
        return;
    }

    if Ty::is_directed() {
        let mut next = M::with_capacity(len);

        for (i, value) in core::mem::take(prev).into_iter().enumerate() {
            next.push(value);

            // End of an old row, pad it with the new columns.
            if (i + 1) % prev_capacity == 0 {
                next.resize_with_none(next.len() + capacity - prev_capacity);
            }
        }

        // New rows.
        next.resize_with_none(len);
        *prev = next;
    } else {
        // Rows of the lower triangle are stored one after another, so
        // growing only appends new rows.
        prev.resize_with_none(len);
    }
}

pub fn index<Ty: EdgeType>(row: usize, col: usize, capacity: usize) -> usize {
    if Ty::is_directed() {
        row * capacity + col
    } else {
        let (row, col) = if row >= col { (row, col) } else { (col, row) };
        // Row r starts after 1 + 2 + ... + r cells.
        row * (row + 1) / 2 + col
    }
}
