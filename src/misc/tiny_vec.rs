use std::{fmt::Debug, hash::Hash, mem::MaybeUninit, ops::Deref};

/// Fixed capacity, stack allocated vector for `Copy` values.
/// Keeps [`crate::backgammon::Board`] and [`crate::backgammon::Play`] `Copy`
/// so the search can clone positions freely.
#[derive(Clone, Copy)]
pub struct TinyVec<T, const N: usize>
where
    T: Copy,
{
    buf: [MaybeUninit<T>; N],
    len: u8,
}

impl<T, const N: usize> TinyVec<T, N>
where
    T: Copy,
{
    pub const fn new() -> Self {
        const { assert!(N <= 255, "TinyVec supports up to 255 elements") }
        TinyVec { buf: [const { MaybeUninit::uninit() }; N], len: 0 }
    }

    pub fn push(&mut self, val: T) {
        assert!(!self.is_full(), "TinyVec is full");
        self.buf[self.len as usize].write(val);
        self.len += 1;
    }

    pub fn is_full(&self) -> bool {
        self.len as usize == N
    }

    /// Removes the element at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len as usize, "TinyVec index out of bounds");
        // SAFETY: index < len, so the slot was initialized
        let removed = unsafe { self.buf[index].assume_init_read() };
        self.buf.copy_within(index + 1..self.len as usize, index);
        self.len -= 1;
        removed
    }
}

impl<T: Copy, const N: usize> Default for TinyVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> Deref for TinyVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Only the first `self.len` elements are initialized
        unsafe { std::slice::from_raw_parts(self.buf.as_ptr() as *const T, self.len as usize) }
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for TinyVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Copy + Eq, const N: usize> Eq for TinyVec<T, N> {}

impl<T: Copy + Hash, const N: usize> Hash for TinyVec<T, N> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Copy + Debug, const N: usize> Debug for TinyVec<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Copy, const N: usize> FromIterator<T> for TinyVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = TinyVec::new();
        for val in iter {
            vec.push(val);
        }
        vec
    }
}
