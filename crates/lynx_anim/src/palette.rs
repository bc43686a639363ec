use core::{
    ops::{Deref, DerefMut},
    ptr::NonNull,
    slice,
};
use std::alloc::{self, Layout};

use lynx_math::prelude::*;

use crate::{Error, Result};

/// Fixed size array of skinning matrices, aligned for SIMD consumption
///
/// The buffer is allocated once and freed with the same layout it was allocated with.
pub struct MatrixPalette {
    ptr    : NonNull<Matrix4>,
    len    : usize,
    layout : Layout,
}

// The palette owns its matrices, like a `Box<[Matrix4]>`
unsafe impl Send for MatrixPalette {}
unsafe impl Sync for MatrixPalette {}

impl MatrixPalette {
    /// Minimum alignment of the palette storage, in bytes
    pub const ALIGNMENT : usize = 16;

    /// Allocate a palette of `len` identity matrices
    pub fn new(len: usize) -> Result<Self> {
        let layout = Layout::array::<Matrix4>(len)
            .and_then(|layout| layout.align_to(Self::ALIGNMENT))
            .map_err(|_| Error::OutOfMemory)?;

        if layout.size() == 0 {
            return Ok(Self { ptr: NonNull::dangling(), len, layout });
        }

        // SAFETY: the layout has a non-zero size
        let ptr = unsafe { alloc::alloc(layout) } as *mut Matrix4;
        let ptr = NonNull::new(ptr).ok_or(Error::OutOfMemory)?;

        for i in 0..len {
            // SAFETY: `i` is within the allocation, which is suitably aligned for `Matrix4`
            unsafe { ptr.as_ptr().add(i).write(Matrix4::IDENTITY) };
        }
        Ok(Self { ptr, len, layout })
    }

    /// Number of matrices in the palette
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer to the first matrix, valid as long as the palette is alive
    pub fn as_ptr(&self) -> *const Matrix4 {
        self.ptr.as_ptr()
    }
}

impl Deref for MatrixPalette {
    type Target = [Matrix4];

    fn deref(&self) -> &Self::Target {
        // SAFETY: `len` matrices were initialized in `new`
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl DerefMut for MatrixPalette {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: `len` matrices were initialized in `new`
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for MatrixPalette {
    fn drop(&mut self) {
        if self.layout.size() != 0 {
            // SAFETY: allocated in `new` with the same layout, `Matrix4` has no drop glue
            unsafe { alloc::dealloc(self.ptr.as_ptr() as *mut u8, self.layout) };
        }
    }
}
