use crate::error::PoolError;

/// Raw handle into a [`HandlePool`]
pub type Handle = u32;

/// Sentinel marking an unbound sparse slot
const INVALID: u32 = u32::MAX;

/// Default sparse table capacity, matching the configured entity budget
pub const DEFAULT_CAPACITY: usize = 1000;

/// A generic sparse-set container mapping small integer handles to owned
/// values.
///
/// Live values sit contiguously in `dense`, so iteration over them is a plain
/// slice walk. Handles are stable logical identities: they survive any
/// mutation except the removal of their own value, at which point the handle
/// is retired and may be recycled by a later [`add`](Self::add). Handles are
/// never indices into `dense` — removal relocates the last element into the
/// freed slot.
///
/// The sparse table is sized at construction and never grows; allocating a
/// fresh handle past its capacity fails with
/// [`PoolError::CapacityExceeded`].
pub struct HandlePool<T> {
    dense: Vec<T>,
    // associated_handles[i] owns dense[i]; the two always have equal length
    associated_handles: Vec<Handle>,
    // sparse[h] is the dense index of handle h, or INVALID when unbound
    sparse: Vec<u32>,
    next_handle: Handle,
    free_handles: Vec<Handle>,
}

impl<T> HandlePool<T> {
    /// Creates a pool with the default handle capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a pool whose sparse table holds up to `capacity` handles
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dense: Vec::new(),
            associated_handles: Vec::new(),
            sparse: vec![INVALID; capacity],
            next_handle: 0,
            free_handles: Vec::new(),
        }
    }

    /// Adds a value to the pool and returns the handle now bound to it.
    ///
    /// Retired handles are recycled before the monotonic counter is bumped.
    pub fn add(&mut self, value: T) -> Result<Handle, PoolError> {
        let handle = match self.free_handles.last() {
            Some(&recycled) => recycled,
            None => self.next_handle,
        };
        if handle as usize >= self.sparse.len() {
            return Err(PoolError::CapacityExceeded(self.sparse.len()));
        }

        // Commit the allocation only after the capacity check passed
        if self.free_handles.pop().is_none() {
            self.next_handle += 1;
        }

        let index = self.dense.len() as u32;
        self.dense.push(value);
        self.associated_handles.push(handle);
        self.sparse[handle as usize] = index;
        Ok(handle)
    }

    /// Gets a reference to the value bound to `handle`
    pub fn get(&self, handle: Handle) -> Result<&T, PoolError> {
        let index = self.index_of(handle)?;
        Ok(&self.dense[index])
    }

    /// Gets a mutable reference to the value bound to `handle`
    pub fn get_mut(&mut self, handle: Handle) -> Result<&mut T, PoolError> {
        let index = self.index_of(handle)?;
        Ok(&mut self.dense[index])
    }

    /// Returns whether `handle` is bound to a live value.
    ///
    /// Total: out-of-range handles are simply not live.
    pub fn has(&self, handle: Handle) -> bool {
        matches!(self.sparse.get(handle as usize), Some(&slot) if slot != INVALID)
    }

    /// Removes and returns the value bound to `handle`.
    ///
    /// The freed dense slot is backfilled by the last element (swap-removal),
    /// so the dense order of the remaining values changes. The handle is
    /// retired for reuse.
    pub fn remove(&mut self, handle: Handle) -> Result<T, PoolError> {
        let index = self.index_of(handle)?;

        let value = self.dense.swap_remove(index);
        self.associated_handles.swap_remove(index);
        if index < self.dense.len() {
            // A relocated survivor now lives at `index`; repoint its sparse slot
            let relocated = self.associated_handles[index];
            self.sparse[relocated as usize] = index as u32;
        }
        self.sparse[handle as usize] = INVALID;
        self.free_handles.push(handle);
        Ok(value)
    }

    /// Returns the handle owning the value at `dense_index`
    pub fn get_associated_handle(&self, dense_index: usize) -> Result<Handle, PoolError> {
        self.associated_handles
            .get(dense_index)
            .copied()
            .ok_or(PoolError::IndexOutOfRange {
                index: dense_index,
                len: self.dense.len(),
            })
    }

    /// Returns the live values as a slice.
    ///
    /// The order is stable until the next mutation but is not handle order;
    /// correlate a position back to its handle with
    /// [`get_associated_handle`](Self::get_associated_handle).
    pub fn dense(&self) -> &[T] {
        &self.dense
    }

    /// Returns the live values as a mutable slice
    pub fn dense_mut(&mut self) -> &mut [T] {
        &mut self.dense
    }

    /// Iterates over all live `(handle, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.associated_handles.iter().copied().zip(self.dense.iter())
    }

    /// Returns the number of live values
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    /// Returns whether the pool holds no live values
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Removes all values and retires every live handle
    pub fn clear(&mut self) {
        for &handle in &self.associated_handles {
            self.sparse[handle as usize] = INVALID;
            self.free_handles.push(handle);
        }
        self.dense.clear();
        self.associated_handles.clear();
    }

    fn index_of(&self, handle: Handle) -> Result<usize, PoolError> {
        match self.sparse.get(handle as usize) {
            Some(&slot) if slot != INVALID => Ok(slot as usize),
            _ => Err(PoolError::NotFound(handle)),
        }
    }
}

impl<T> Default for HandlePool<T> {
    fn default() -> Self {
        Self::new()
    }
}
